pub mod audio;
pub mod carousel;
pub mod constants;
pub mod dispatch;
pub mod highlight;
pub mod layout;
pub mod notes;
pub mod orbit;
pub mod pick;
pub mod scene;
pub mod stage;

pub use audio::*;
pub use carousel::*;
pub use constants::*;
pub use dispatch::*;
pub use highlight::*;
pub use layout::*;
pub use notes::*;
pub use orbit::*;
pub use pick::*;
pub use scene::*;
pub use stage::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
