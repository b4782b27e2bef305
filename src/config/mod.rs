// Re-export all items from the submodules
mod credentials;
mod upload_options;

// Re-export credentials
pub use credentials::FtpCredentials;

// Re-export upload options
pub use upload_options::UploadOptions;
