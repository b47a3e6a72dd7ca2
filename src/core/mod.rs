pub mod audio;
pub mod live;
pub mod retell;

// Re-export commonly used types for convenience
pub use audio::{f32_to_pcm16, pcm16_to_f32};

pub use retell::{
    CreateWebCallRequest, RegisterCallRequest, RegisterCallResponse, RetellClient, RetellError,
    RetellResult, WebCallResponse,
};

pub use live::{
    ConnectionState, LiveClient, LiveClientOptions, LiveError, LiveResult, LiveSession,
    PromptParam,
};
