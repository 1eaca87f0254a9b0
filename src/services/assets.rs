//! Static assets: the icon image and the reminder sound

use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;
use tracing::info;

/// Errors while loading assets at startup
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("icon {path} is not a readable image")]
    Icon {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("sound {path} is not a playable audio file")]
    Sound {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// Decoded icon pixels, ready for the tray
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    /// RGBA8 pixels, row by row
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Assets kept in memory for the process lifetime
#[derive(Debug, Clone)]
pub struct Assets {
    /// Decoded icon image
    pub icon: IconImage,
    /// Encoded sound file
    pub sound: Arc<[u8]>,
}

impl Assets {
    /// Read and validate both assets; any failure is fatal
    pub fn load(icon_path: &Path, sound_path: &Path) -> Result<Self, AssetError> {
        let encoded = read(icon_path)?;
        let image = image::load_from_memory(&encoded)
            .map_err(|source| AssetError::Icon {
                path: icon_path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        let (width, height) = image.dimensions();
        info!("Loaded icon {} ({}x{})", icon_path.display(), width, height);
        let icon = IconImage {
            rgba: image.into_raw(),
            width,
            height,
        };

        let sound = read(sound_path)?;
        rodio::Decoder::new(Cursor::new(Arc::clone(&sound))).map_err(|source| {
            AssetError::Sound {
                path: sound_path.to_path_buf(),
                source,
            }
        })?;
        info!("Loaded sound {} ({} bytes)", sound_path.display(), sound.len());

        Ok(Self { icon, sound })
    }
}

fn read(path: &Path) -> Result<Arc<[u8]>, AssetError> {
    fs::read(path)
        .map(Arc::from)
        .map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })
}
