//! Template extensions placing the QR panel on object detail pages.

use qr_payload::FieldSource;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::PluginSettings;
use crate::kind::ObjectKind;
use crate::render::render_data_uri;

/// Template rendered into the right-hand column.
pub const TEMPLATE_NAME: &str = "netbox_qr/qrcode.html";

/// Request parameter selecting the export format.
pub const FORMAT_PARAM: &str = "format";

/// `format` value that suppresses the text label.
pub const FORMAT_WITHOUT_TEXT: &str = "without_text";

/// What the plugin needs from the host while rendering one page.
pub trait TemplateHost {
    /// Render a named template with a JSON context.
    fn render(&self, template: &str, context: &serde_json::Value) -> String;

    /// The object whose detail page is being rendered.
    fn object(&self) -> &dyn FieldSource;

    /// Absolute URL of the object's detail page.
    fn absolute_url(&self) -> Option<String>;

    /// A query parameter of the current request.
    fn query_param(&self, name: &str) -> Option<String>;
}

/// Context handed to [`TEMPLATE_NAME`].
#[derive(Debug, Clone, Serialize)]
pub struct QrPanelContext {
    pub image: String,
    pub with_text: bool,
    pub text_below: bool,
    pub kind: ObjectKind,
}

/// QR panel for one host model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrCodeContent {
    kind: ObjectKind,
}

impl QrCodeContent {
    pub fn new(kind: ObjectKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Host model label this extension attaches to.
    pub fn model(&self) -> &'static str {
        self.kind.model()
    }

    /// Render the right-page fragment.
    ///
    /// Returns `None` when the kind is not enabled or the panel could not be
    /// produced; the page then renders without it.
    pub fn right_page(&self, host: &dyn TemplateHost, settings: &PluginSettings) -> Option<String> {
        if !settings.is_enabled(self.kind) {
            debug!(kind = %self.kind, "QR panel disabled for kind");
            return None;
        }

        let mut options = settings.options_for(self.kind);
        if let Some(format) = host.query_param(FORMAT_PARAM) {
            options.with_text = format != FORMAT_WITHOUT_TEXT;
        }

        let font = settings.font_loader().load(Some(options.font.as_str()));
        let url = host.absolute_url();
        let image = match render_data_uri(&options, host.object(), url.as_deref(), &font) {
            Ok(uri) => uri,
            Err(e) => {
                warn!(kind = %self.kind, error = %e, "Failed to render QR panel");
                return None;
            }
        };

        let context = QrPanelContext {
            image,
            with_text: options.with_text,
            text_below: options.text_below,
            kind: self.kind,
        };
        match serde_json::to_value(&context) {
            Ok(value) => Some(host.render(TEMPLATE_NAME, &value)),
            Err(e) => {
                warn!(kind = %self.kind, error = %e, "Failed to build template context");
                None
            }
        }
    }
}

/// One extension per supported host model.
pub fn template_extensions() -> Vec<QrCodeContent> {
    ObjectKind::ALL.into_iter().map(QrCodeContent::new).collect()
}
