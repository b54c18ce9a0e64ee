use camino::{Utf8Path, Utf8PathBuf};

macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl $name {
            pub fn to_absolute(mut self, base: &Utf8Path) -> Self {
                $(self.$field = base.join(self.$field);)*
                self
            }

            pub fn new(base: &Utf8Path) -> Self {
                Self::default().to_absolute(base)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

/// Executable names that mark a directory as a Ryujinx install (Windows, then Linux/macOS).
pub const RYUJINX_EXECUTABLES: [&str; 2] = ["Ryujinx.exe", "Ryujinx"];

/// Directory name that switches an install to portable mode.
pub const PORTABLE_DIR: &str = "portable";

/// Name of the shared data directory under the OS config dir.
pub const SYSTEM_DATA_DIR_NAME: &str = "Ryujinx";

define_paths!(InstallPaths {
    portable: PORTABLE_DIR,
});

define_paths!(DataPaths {
    games: "games",
    keys: "system/prod.keys",
    firmware: "bis/system/Contents/registered",
    mods: "mods/contents",
});

define_paths!(GamePaths {
    metadata: "gui/metadata.json",
    shader_archive: "cache/shader/guest/program/cache.zip",
    host_shader_cache: "cache/shader/opengl",
});

impl DataPaths {
    pub fn game(&self, title_id: &str) -> GamePaths {
        GamePaths::new(&self.games.join(title_id))
    }

    pub fn mod_dir(&self, title_id: &str, mod_name: &str) -> Utf8PathBuf {
        self.mods.join(title_id).join(mod_name)
    }
}
