//! Process exit codes for the `campus` binary, taken from BSD sysexits.h
//! so shell scripts can tell a rejected edit from a missing data file.

/// Command completed; the data file (if touched) was saved
pub const OK: i32 = 0;

/// Bad invocation: unknown flags, `init` over an existing file without `--force`
pub const USAGE: i32 = 64;

/// The tree rejected the operation (blank name, duplicate key, unknown path,
/// grade out of range) or the data file holds an invalid institute
pub const DATAERR: i32 = 65;

/// The data file does not exist yet (run `campus init`)
pub const NOINPUT: i32 = 66;

/// Reading or writing the data file failed for any other reason
pub const IOERR: i32 = 74;

/// A config file or `CAMPUS_*` variable could not be used
pub const CONFIG: i32 = 78;
