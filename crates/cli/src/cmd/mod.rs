mod containerized;
mod image;
mod local;
mod setup;

pub use containerized::cmd_containerized;
pub use image::cmd_image;
pub use local::cmd_local;
pub use setup::cmd_setup;
