pub mod assets;
pub mod camera;
pub mod catalog;
pub mod clock;
pub mod constants;
pub mod mesh;
pub mod ornament;
pub mod particles;
pub mod presenters;
pub mod scene;
pub mod scroll;
pub mod viewer;

pub use assets::*;
pub use camera::*;
pub use catalog::*;
pub use clock::*;
pub use constants::*;
pub use ornament::*;
pub use particles::*;
pub use presenters::*;
pub use scene::*;
pub use scroll::*;
pub use viewer::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static SPRITES_WGSL: &str = include_str!("../../shaders/sprites.wgsl");
