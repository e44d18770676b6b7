mod modifier;
pub use modifier::{configure, Mod};

mod lens;
pub use lens::{Compose, Field, Identity, Lens, LensExt};

mod transform;

mod shared;

mod ops;
pub use ops::Modify;
