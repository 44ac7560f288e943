// =============== Imports ================
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::os::unix::net::UnixStream;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;

// ! Both the spawned player and the connecting side must agree on this path
pub const SOCKET_NAME: &str = "/tmp/canito.socket";

/// A single connection attempt to a running player's IPC socket.
/// The stream (if any) is closed when the channel is dropped.
pub struct PlayerChannel {
    path: PathBuf,
    stream: Option<UnixStream>,
}

impl PlayerChannel {
    pub fn new() -> Self {
        Self::at(SOCKET_NAME)
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        PlayerChannel {
            path: path.into(),
            stream: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Connect to the player socket.
    /// `Ok(false)` means nobody is listening: the socket is missing or refuses connections.
    /// Any other failure is returned as is.
    pub fn connect(&mut self) -> io::Result<bool> {
        match UnixStream::connect(&self.path) {
            Ok(stream) => {
                log::info!("Connected to player at {}", self.path.display());
                self.stream = Some(stream);
                Ok(true)
            }
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::ConnectionRefused
                ) =>
            {
                log::info!("No player listening at {}: {}", self.path.display(), e);
                Ok(false)
            }
            Err(e) => {
                log::error!("Failed to connect to {}: {}", self.path.display(), e);
                Err(e)
            }
        }
    }

    // * Builds the mpv invocation without running it
    pub fn player_invocation(&self, player: &str, media_file: &str) -> Command {
        let mut cmd = Command::new(player);
        cmd.arg(media_file)
            .arg("--no-video")
            .arg("--term-playing-msg='${media-title}'")
            .arg("--keep-open=yes")
            .arg(format!("--input-ipc-server={}", self.path.display()));
        cmd
    }

    /// Replaces this process with a player playing `media_file`.
    /// Only returns if the player could not be launched.
    pub fn spawn_new_player(&self, player: &str, media_file: &str) -> anyhow::Error {
        let mut cmd = self.player_invocation(player, media_file);
        log::info!("Replacing process with: {:?}", cmd);

        let err = cmd.exec();
        log::error!("Failed to launch {}: {}", player, err);
        anyhow::Error::new(err).context(format!("Failed to start player with program: {}", player))
    }

    /// Queue `media_file` at the end of the player's playlist.
    /// The path must not contain `"`, it is not escaped.
    pub fn append_to_playlist(&mut self, media_file: &str) -> Result<()> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("Not connected to player at {}", self.path.display()))?;

        let cmd = loadfile_command(media_file);
        log::debug!("Sending to player: {}", cmd.trim_end());
        stream
            .write_all(cmd.as_bytes())
            .with_context(|| "Failed to write loadfile command to MPV socket")?;
        stream
            .flush()
            .with_context(|| "Failed to flush MPV socket")?;
        Ok(())
    }
}

impl Default for PlayerChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PlayerChannel {
    fn drop(&mut self) {
        if self.stream.take().is_some() {
            log::debug!("Closing player channel at {}", self.path.display());
        }
    }
}

// No escaping, a `"` inside the path breaks the command
pub fn loadfile_command(media_file: &str) -> String {
    format!("loadfile \"{}\" append-play\n", media_file)
}
