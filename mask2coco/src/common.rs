pub use anyhow::{ensure, format_err, Context as _, Error, Result};
pub use futures::stream::{self, StreamExt as _};
pub use log::{error, info, warn};
pub use par_stream::prelude::*;
pub use rand::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
