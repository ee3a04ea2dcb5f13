//! sw-tree: navigation forest of drive subsystems.
//!
//! Provides:
//! - Tree node and forest structures
//! - Incremental builder with validation
//! - The built-in drive forest (online drive + offline unsaved groups)
//!
//! Tree nodes carry no parameter data. A node's name is the lookup key
//! into the parameter repository.
//!
//! # Example
//!
//! ```
//! use sw_tree::TreeBuilder;
//!
//! let mut builder = TreeBuilder::new();
//! let root = builder.add_root("On Line Drives");
//! let drive = builder.add_child(root, "Drive");
//! builder.add_child(drive, "Motor");
//! let forest = builder.build().unwrap();
//!
//! assert!(forest.contains("Motor"));
//! assert_eq!(forest.roots().len(), 1);
//! ```

pub mod builder;
pub mod drive;
pub mod error;
pub mod forest;
pub(crate) mod validate;

pub use builder::TreeBuilder;
pub use drive::drive_forest;
pub use error::{TreeError, TreeResult};
pub use forest::{DEFAULT_GLYPH, DriveForest, TreeNode};
