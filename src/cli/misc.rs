use std::{fs::File, io::BufReader, path::PathBuf};

use iengine::{
    context::Context,
    types::err::{self},
};

#[cfg(feature = "xz")]
use xz2::read::XzDecoder;

/// Reads the TELL/ASK file at the path into the context, decompressing `.xz` files if the `xz` feature is enabled.
pub fn load_tell_ask(context: &mut Context, path: &PathBuf) -> Result<(), err::ErrorKind> {
    let file = match File::open(path) {
        Err(_) => {
            return Err(err::ErrorKind::from(err::ReadError::Open(
                path.display().to_string(),
            )))
        }
        Ok(f) => f,
    };

    match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            context.read_tell_ask(BufReader::new(XzDecoder::new(&file)))?;
        }
        _ => {
            context.read_tell_ask(BufReader::new(&file))?;
        }
    };
    Ok(())
}
