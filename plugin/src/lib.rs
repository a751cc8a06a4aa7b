//! NetBox QR code plugin.
//!
//! Builds a QR payload from configured object fields, composites the QR
//! bitmap with optional labels and hands a PNG data URI to the host's
//! template layer. The host is reached only through [`TemplateHost`].

pub mod config;
pub mod kind;
pub mod render;
pub mod template_content;

pub use config::{ConfigError, PluginSettings, QrOptions, QrOptionsOverride};
pub use kind::ObjectKind;
pub use render::{LabelLayout, compose, render_data_uri, render_panel};
pub use template_content::{QrCodeContent, TemplateHost, template_extensions};

/// Plugin declaration as registered with the host.
#[derive(Debug, Clone, Copy)]
pub struct PluginMetadata {
    pub name: &'static str,
    pub verbose_name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub base_url: &'static str,
}

pub const PLUGIN: PluginMetadata = PluginMetadata {
    name: "netbox_qr",
    verbose_name: "QR Code plugin for netbox.",
    version: env!("CARGO_PKG_VERSION"),
    description: "A netbox plugin for generating qr codes for specific pages.",
    base_url: "qr",
};
