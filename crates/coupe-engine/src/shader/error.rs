use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("shader `{label}` failed to parse:\n{message}")]
    Parse { label: String, message: String },

    #[error("shader `{label}` failed validation: {message}")]
    Validate { label: String, message: String },

    #[error("shader `{label}` declares a {shader}-byte uniform block at @group(0) @binding(0); host layout is {host} bytes")]
    LayoutMismatch { label: String, shader: u32, host: u32 },

    #[error("shader `{label}` has no uniform block at @group(0) @binding(0)")]
    MissingUniforms { label: String },
}
