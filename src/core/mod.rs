//! Core-Domänentypen: Szenarien, Assets, Actors, Präsentations-Indizes,
//! Kamera, Spatial-Index.

pub mod actor;
pub mod actor_ref;
pub mod actor_tree;
pub mod assets;
pub mod camera;
pub mod collision_camera;
pub mod data_tree;
pub mod geometry;
pub mod map_geometry;
pub mod scenario;
pub mod shapes;
pub mod spatial;

pub use actor::{Actor, ActorFlags, ActorLayerKind, ActorObserver, SelectionChange, DOT_SIZE};
pub use actor_ref::{ActorLink, ActorRef, LinkError};
pub use actor_tree::{ActorLeaf, ActorTree, CheckState, NodeId, NodeKind, TreeNode};
pub use assets::{AssetError, AssetResolver, AssetSource, MemoryAssetSource, RomError, RomFs};
pub use camera::Camera2D;
pub use collision_camera::CollisionCameraItem;
pub use data_tree::{build_actor_record, ActorRecord, DataActivation, DataNode};
pub use geometry::Rect2;
pub use map_geometry::{MapArea, MapGeometry};
pub use scenario::{GameVersion, Scenario};
pub use shapes::{Primitive, Shape, ShapeCategory, ShapeStyle};
pub use spatial::{SpatialIndex, SpatialMatch};
