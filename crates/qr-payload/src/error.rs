/// Reasons a configured field could not be turned into a payload fragment.
///
/// These never reach the caller of the builder; they are logged and the
/// field is dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("field `{field}` does not support sub-key lookup `{key}`")]
    NotAMapping { field: String, key: String },

    #[error("field `{field}` has no related `{relation}`")]
    MissingRelation { field: String, relation: &'static str },

    #[error("field `{field}` is not a scalar value")]
    NotScalar { field: String },
}
