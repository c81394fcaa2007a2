mod error;
use error::{error_context, generr, inerr, unkext, wrgobj};
pub use error::Error;

mod path;
pub use path::{AbstPath, ObjectType};

mod file;
pub use file::file_size;

mod mtime;
pub use mtime::{get_mtime, set_mtime, Mtime};

mod walk;
pub use walk::{walk, WalkEntry};

mod saveload;
pub use saveload::load;

mod env;
pub use env::{cwd, home_dir};
