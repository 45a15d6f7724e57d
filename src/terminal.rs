//! Terminal plumbing: raw mode, window size and resize notifications
//!
//! Unix only. Raw mode is a guard value that restores the saved settings
//! when dropped, so every exit path out of the editor releases it.

use std::io;
use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// How often the resize thread checks for a pending SIGWINCH
const RESIZE_POLL_INTERVAL: Duration = Duration::from_millis(50);

static RESIZE_PENDING: AtomicBool = AtomicBool::new(false);

/// Raw mode on stdin, restored on drop
pub struct RawMode {
    original: libc::termios,
}

impl RawMode {
    /// Switch stdin to raw mode.
    ///
    /// Reads return after at most 100 ms even without input.
    pub fn enable() -> io::Result<Self> {
        let original = get_termios(libc::STDIN_FILENO)?;

        let mut raw = original;
        raw.c_iflag &= !(libc::IXON | libc::ICRNL | libc::BRKINT | libc::INPCK | libc::ISTRIP);
        raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::ISIG | libc::IEXTEN);
        raw.c_oflag &= !libc::OPOST;
        raw.c_cflag |= libc::CS8;
        raw.c_cc[libc::VMIN] = 0;
        raw.c_cc[libc::VTIME] = 1;

        set_termios(libc::STDIN_FILENO, &raw)?;
        tracing::debug!("raw mode enabled");
        Ok(Self { original })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = set_termios(libc::STDIN_FILENO, &self.original) {
            tracing::error!("failed to restore terminal mode: {}", e);
        } else {
            tracing::debug!("raw mode disabled");
        }
    }
}

fn get_termios(fd: libc::c_int) -> io::Result<libc::termios> {
    let mut termios = MaybeUninit::<libc::termios>::uninit();
    // SAFETY: tcgetattr fully initialises the struct when it returns 0
    let rc = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: checked rc above
    Ok(unsafe { termios.assume_init() })
}

fn set_termios(fd: libc::c_int, termios: &libc::termios) -> io::Result<()> {
    // SAFETY: termios points to a valid, initialised struct
    let rc = unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Terminal size as `(cols, rows)`
pub fn window_size() -> io::Result<(u16, u16)> {
    let mut size = MaybeUninit::<libc::winsize>::zeroed();
    // SAFETY: TIOCGWINSZ writes a winsize into the pointer we pass
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: zero-initialised and filled in by ioctl
    let size = unsafe { size.assume_init() };
    if size.ws_col == 0 || size.ws_row == 0 {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            "terminal reported a zero window size",
        ));
    }
    Ok((size.ws_col, size.ws_row))
}

extern "C" fn on_sigwinch(_signal: libc::c_int) {
    RESIZE_PENDING.store(true, Ordering::SeqCst);
}

/// Watch for SIGWINCH and send the new `(cols, rows)` on each resize.
///
/// The signal handler only sets a flag. A background thread picks it up,
/// re-queries the size and sends it; it stops once the receiver is gone.
pub fn spawn_resize_listener() -> io::Result<Receiver<(u16, u16)>> {
    // SAFETY: the handler only touches an atomic, which is signal safe
    let previous = unsafe {
        libc::signal(
            libc::SIGWINCH,
            on_sigwinch as extern "C" fn(libc::c_int) as libc::sighandler_t,
        )
    };
    if previous == libc::SIG_ERR {
        return Err(io::Error::last_os_error());
    }

    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("resize-listener".to_string())
        .spawn(move || loop {
            thread::sleep(RESIZE_POLL_INTERVAL);
            if !RESIZE_PENDING.swap(false, Ordering::SeqCst) {
                continue;
            }
            match window_size() {
                Ok(size) => {
                    if tx.send(size).is_err() {
                        break;
                    }
                }
                Err(e) => tracing::warn!("failed to read window size: {}", e),
            }
        })?;

    Ok(rx)
}
