//! In-memory file system with handle-based file IO.
//!
//! Paths are Unix style with `/` as the root; relative paths resolve
//! against the working directory. Handles are small positive integers
//! minted at open and dead after close. All failures are flat zeros, a
//! bad handle on a position query reads -1.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Reported volume size, in kilobytes.
pub const VOLUME_TOTAL_KB: i32 = 16384;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileMode {
    Read,
    Write,
    Append,
}

impl FileMode {
    fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Read),
            1 => Some(Self::Write),
            2 => Some(Self::Append),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone)]
struct FileData {
    bytes: Vec<u8>,
    reserved: usize,
}

#[derive(Debug)]
struct OpenHandle {
    path: String,
    mode: FileMode,
    position: usize,
}

/// The simulated storage volume.
#[derive(Debug)]
pub struct Storage {
    dirs: BTreeSet<String>,
    files: BTreeMap<String, FileData>,
    handles: HashMap<i32, OpenHandle>,
    next_handle: i32,
    cwd: String,
}

impl Default for Storage {
    fn default() -> Self {
        let mut dirs = BTreeSet::new();
        dirs.insert("/".to_string());
        Self {
            dirs,
            files: BTreeMap::new(),
            handles: HashMap::new(),
            next_handle: 1,
            cwd: "/".to_string(),
        }
    }
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a possibly relative path against the working directory.
    fn resolve(&self, path: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !path.starts_with('/') {
            parts.extend(self.cwd.split('/').filter(|p| !p.is_empty()));
        }
        for part in path.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                other => parts.push(other),
            }
        }
        if parts.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", parts.join("/"))
        }
    }

    fn parent(path: &str) -> String {
        match path.rfind('/') {
            Some(0) | None => "/".to_string(),
            Some(idx) => path[..idx].to_string(),
        }
    }

    /// Seeds a file with contents, creating it directly. Test setup only;
    /// scripts go through handles.
    pub fn seed_file(&mut self, path: &str, contents: &[u8]) {
        let full = self.resolve(path);
        self.files.insert(
            full,
            FileData {
                bytes: contents.to_vec(),
                reserved: 0,
            },
        );
    }

    pub fn open(&mut self, file_name: &str, mode: i32) -> i32 {
        let Some(mode) = FileMode::from_raw(mode) else {
            return 0;
        };
        let path = self.resolve(file_name);
        if self.dirs.contains(&path) {
            return 0;
        }
        let position = match mode {
            FileMode::Read => {
                if !self.files.contains_key(&path) {
                    return 0;
                }
                0
            }
            FileMode::Write => {
                if !self.dirs.contains(&Self::parent(&path)) {
                    return 0;
                }
                self.files.insert(path.clone(), FileData::default());
                0
            }
            FileMode::Append => {
                if !self.dirs.contains(&Self::parent(&path)) {
                    return 0;
                }
                self.files
                    .entry(path.clone())
                    .or_default()
                    .bytes
                    .len()
            }
        };
        let handle = self.next_handle;
        self.next_handle += 1;
        self.handles.insert(handle, OpenHandle { path, mode, position });
        handle
    }

    pub fn close(&mut self, handle: i32) -> i32 {
        i32::from(self.handles.remove(&handle).is_some())
    }

    pub fn write(&mut self, handle: i32, data: &[u8]) -> i32 {
        let Some(open) = self.handles.get_mut(&handle) else {
            return 0;
        };
        if open.mode == FileMode::Read {
            return 0;
        }
        let Some(file) = self.files.get_mut(&open.path) else {
            return 0;
        };
        let end = open.position + data.len();
        if file.bytes.len() < end {
            file.bytes.resize(end, 0);
        }
        file.bytes[open.position..end].copy_from_slice(data);
        open.position = end;
        1
    }

    pub fn pre_allocate(&mut self, handle: i32, size_in_bytes: i32) -> i32 {
        if size_in_bytes < 0 {
            return 0;
        }
        let Some(open) = self.handles.get(&handle) else {
            return 0;
        };
        if open.mode == FileMode::Read {
            return 0;
        }
        let Some(file) = self.files.get_mut(&open.path) else {
            return 0;
        };
        file.reserved = file.reserved.max(size_in_bytes as usize);
        1
    }

    pub fn read(&mut self, handle: i32, data: &mut [u8]) -> (i32, i32) {
        let Some(open) = self.handles.get_mut(&handle) else {
            return (0, 0);
        };
        if open.mode != FileMode::Read {
            return (0, 0);
        }
        let Some(file) = self.files.get(&open.path) else {
            return (0, 0);
        };
        let available = file.bytes.len().saturating_sub(open.position);
        let n = available.min(data.len());
        data[..n].copy_from_slice(&file.bytes[open.position..open.position + n]);
        open.position += n;
        (1, n as i32)
    }

    /// Reads up to the next newline. The newline is consumed, not stored;
    /// a carriage return before it is dropped too. Fails at end of file.
    pub fn read_line(&mut self, handle: i32, data: &mut [u8]) -> (i32, i32) {
        let Some(open) = self.handles.get_mut(&handle) else {
            return (0, 0);
        };
        if open.mode != FileMode::Read {
            return (0, 0);
        }
        let Some(file) = self.files.get(&open.path) else {
            return (0, 0);
        };
        if open.position >= file.bytes.len() {
            return (0, 0);
        }
        let mut n = 0;
        while n < data.len() && open.position < file.bytes.len() {
            let byte = file.bytes[open.position];
            open.position += 1;
            if byte == b'\n' {
                if n > 0 && data[n - 1] == b'\r' {
                    n -= 1;
                }
                return (1, n as i32);
            }
            data[n] = byte;
            n += 1;
        }
        (1, n as i32)
    }

    pub fn set_position(&mut self, handle: i32, position: i32) -> i32 {
        if position < 0 {
            return 0;
        }
        let Some(open) = self.handles.get_mut(&handle) else {
            return 0;
        };
        let Some(file) = self.files.get(&open.path) else {
            return 0;
        };
        if position as usize > file.bytes.len() {
            return 0;
        }
        open.position = position as usize;
        1
    }

    pub fn position(&self, handle: i32) -> i32 {
        self.handles
            .get(&handle)
            .map_or(-1, |open| open.position as i32)
    }

    pub fn size(&self, handle: i32) -> i32 {
        self.handles
            .get(&handle)
            .and_then(|open| self.files.get(&open.path))
            .map_or(-1, |file| file.bytes.len() as i32)
    }

    pub fn exists(&self, file_name: &str) -> i32 {
        let path = self.resolve(file_name);
        i32::from(self.files.contains_key(&path) || self.dirs.contains(&path))
    }

    pub fn make_directory(&mut self, file_name: &str) -> i32 {
        let path = self.resolve(file_name);
        if self.dirs.contains(&path) || self.files.contains_key(&path) {
            return 0;
        }
        if !self.dirs.contains(&Self::parent(&path)) {
            return 0;
        }
        self.dirs.insert(path);
        1
    }

    pub fn change_directory(&mut self, file_name: &str) -> i32 {
        let path = self.resolve(file_name);
        if !self.dirs.contains(&path) {
            return 0;
        }
        self.cwd = path;
        1
    }

    pub fn working_directory(&self) -> &str {
        &self.cwd
    }

    pub fn rename(&mut self, name: &str, new_name: &str) -> i32 {
        let from = self.resolve(name);
        let to = self.resolve(new_name);
        if self.files.contains_key(&to) || self.dirs.contains(&to) {
            return 0;
        }
        if !self.dirs.contains(&Self::parent(&to)) {
            return 0;
        }
        if let Some(file) = self.files.remove(&from) {
            self.files.insert(to, file);
            return 1;
        }
        if self.dirs.contains(&from) && from != "/" {
            let prefix = format!("{from}/");
            let moved_dirs: Vec<String> = self
                .dirs
                .iter()
                .filter(|d| **d == from || d.starts_with(&prefix))
                .cloned()
                .collect();
            for dir in moved_dirs {
                self.dirs.remove(&dir);
                self.dirs.insert(format!("{to}{}", &dir[from.len()..]));
            }
            let moved_files: Vec<String> = self
                .files
                .keys()
                .filter(|f| f.starts_with(&prefix))
                .cloned()
                .collect();
            for file in moved_files {
                let data = self.files.remove(&file).unwrap_or_default();
                self.files.insert(format!("{to}{}", &file[from.len()..]), data);
            }
            return 1;
        }
        0
    }

    pub fn remove(&mut self, file_name: &str) -> i32 {
        let path = self.resolve(file_name);
        if self.files.remove(&path).is_some() {
            return 1;
        }
        if self.dirs.contains(&path) && path != "/" && path != self.cwd {
            let prefix = format!("{path}/");
            let empty = !self.dirs.iter().any(|d| d.starts_with(&prefix))
                && !self.files.keys().any(|f| f.starts_with(&prefix));
            if empty {
                self.dirs.remove(&path);
                return 1;
            }
        }
        0
    }

    /// Copies the name of the `index`-th entry of `directory` into
    /// `name_out`. Entries are sorted by name, directories and files
    /// together. Returns (found flag, bytes written).
    pub fn directory_item_by_index(
        &self,
        directory: &str,
        include_extension: bool,
        index: i32,
        name_out: &mut [u8],
    ) -> (i32, i32) {
        if index < 0 {
            return (0, 0);
        }
        let dir = self.resolve(directory);
        if !self.dirs.contains(&dir) {
            return (0, 0);
        }
        let prefix = if dir == "/" { "/".to_string() } else { format!("{dir}/") };
        let direct_child = |path: &str| -> Option<String> {
            let rest = path.strip_prefix(&prefix)?;
            if rest.is_empty() || rest.contains('/') {
                None
            } else {
                Some(rest.to_string())
            }
        };
        let mut names: Vec<String> = Vec::new();
        for d in &self.dirs {
            if let Some(name) = direct_child(d) {
                names.push(name);
            }
        }
        for f in self.files.keys() {
            if let Some(name) = direct_child(f) {
                let name = if include_extension {
                    name
                } else {
                    match name.rfind('.') {
                        Some(idx) if idx > 0 => name[..idx].to_string(),
                        _ => name,
                    }
                };
                names.push(name);
            }
        }
        names.sort();
        let Some(name) = names.get(index as usize) else {
            return (0, 0);
        };
        let bytes = name.as_bytes();
        let n = bytes.len().min(name_out.len());
        name_out[..n].copy_from_slice(&bytes[..n]);
        (1, n as i32)
    }

    /// Returns (free, total) kilobytes.
    pub fn volume_info(&self) -> (i32, i32) {
        let used_bytes: usize = self
            .files
            .values()
            .map(|f| f.bytes.len().max(f.reserved))
            .sum();
        let used_kb = used_bytes.div_ceil(1024) as i32;
        ((VOLUME_TOTAL_KB - used_kb).max(0), VOLUME_TOTAL_KB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_read_requires_existing_file() {
        let mut fs = Storage::new();
        assert_eq!(fs.open("missing.txt", 0), 0);

        fs.seed_file("/data.txt", b"abc");
        let handle = fs.open("data.txt", 0);
        assert!(handle > 0);
        assert_eq!(fs.close(handle), 1);
        assert_eq!(fs.close(handle), 0);
    }

    #[test]
    fn test_invalid_mode_is_refused() {
        let mut fs = Storage::new();
        assert_eq!(fs.open("x.txt", 3), 0);
        assert_eq!(fs.open("x.txt", -1), 0);
    }

    #[test]
    fn test_write_then_read_back() {
        let mut fs = Storage::new();
        let w = fs.open("log.txt", 1);
        assert!(w > 0);
        assert_eq!(fs.write(w, b"hello"), 1);
        assert_eq!(fs.position(w), 5);
        assert_eq!(fs.close(w), 1);

        let r = fs.open("log.txt", 0);
        let mut buf = [0u8; 16];
        assert_eq!(fs.read(r, &mut buf), (1, 5));
        assert_eq!(&buf[..5], b"hello");
        // At end of file a read still succeeds with zero bytes.
        assert_eq!(fs.read(r, &mut buf), (1, 0));
    }

    #[test]
    fn test_write_mode_truncates_and_append_extends() {
        let mut fs = Storage::new();
        fs.seed_file("/log.txt", b"old contents");

        let a = fs.open("log.txt", 2);
        assert_eq!(fs.position(a), 12);
        fs.write(a, b"+new");
        fs.close(a);
        let r = fs.open("log.txt", 0);
        assert_eq!(fs.size(r), 16);
        fs.close(r);

        let w = fs.open("log.txt", 1);
        assert_eq!(fs.size(w), 0);
        fs.close(w);
    }

    #[test]
    fn test_read_rejects_write_handle() {
        let mut fs = Storage::new();
        let w = fs.open("a.txt", 1);
        let mut buf = [0u8; 4];
        assert_eq!(fs.read(w, &mut buf), (0, 0));
        let r = fs.open("a.txt", 0);
        assert_eq!(fs.write(r, b"x"), 0);
    }

    #[test]
    fn test_read_line_consumes_newline() {
        let mut fs = Storage::new();
        fs.seed_file("/lines.txt", b"first\r\nsecond\nlast");
        let h = fs.open("lines.txt", 0);
        let mut buf = [0u8; 32];

        let (ok, n) = fs.read_line(h, &mut buf);
        assert_eq!((ok, &buf[..n as usize]), (1, &b"first"[..]));

        let (ok, n) = fs.read_line(h, &mut buf);
        assert_eq!((ok, &buf[..n as usize]), (1, &b"second"[..]));

        let (ok, n) = fs.read_line(h, &mut buf);
        assert_eq!((ok, &buf[..n as usize]), (1, &b"last"[..]));

        // Nothing left.
        assert_eq!(fs.read_line(h, &mut buf), (0, 0));
    }

    #[test]
    fn test_read_line_stops_at_buffer_capacity() {
        let mut fs = Storage::new();
        fs.seed_file("/long.txt", b"abcdefgh\n");
        let h = fs.open("long.txt", 0);
        let mut buf = [0u8; 4];
        assert_eq!(fs.read_line(h, &mut buf), (1, 4));
        assert_eq!(&buf, b"abcd");
    }

    #[test]
    fn test_positions() {
        let mut fs = Storage::new();
        fs.seed_file("/d.bin", b"0123456789");
        let h = fs.open("d.bin", 0);
        assert_eq!(fs.set_position(h, 4), 1);
        assert_eq!(fs.position(h), 4);
        assert_eq!(fs.set_position(h, 11), 0);
        assert_eq!(fs.set_position(h, -1), 0);
        assert_eq!(fs.position(999), -1);
        assert_eq!(fs.size(999), -1);
    }

    #[test]
    fn test_directories_and_cwd() {
        let mut fs = Storage::new();
        assert_eq!(fs.make_directory("/captures"), 1);
        assert_eq!(fs.make_directory("/captures"), 0);
        assert_eq!(fs.make_directory("/deep/nested"), 0);

        assert_eq!(fs.change_directory("/captures"), 1);
        assert_eq!(fs.working_directory(), "/captures");

        let w = fs.open("door.sub", 1);
        fs.write(w, b"raw");
        fs.close(w);
        assert_eq!(fs.exists("/captures/door.sub"), 1);
        assert_eq!(fs.exists("door.sub"), 1);

        assert_eq!(fs.change_directory("/nope"), 0);
    }

    #[test]
    fn test_rename_file_and_directory() {
        let mut fs = Storage::new();
        fs.make_directory("/old");
        fs.seed_file("/old/a.txt", b"a");
        assert_eq!(fs.rename("/old/a.txt", "/old/b.txt"), 1);
        assert_eq!(fs.exists("/old/a.txt"), 0);
        assert_eq!(fs.exists("/old/b.txt"), 1);

        assert_eq!(fs.rename("/old", "/new"), 1);
        assert_eq!(fs.exists("/new/b.txt"), 1);
        assert_eq!(fs.exists("/old"), 0);

        // Destination collision fails.
        fs.seed_file("/clash.txt", b"x");
        assert_eq!(fs.rename("/new/b.txt", "/clash.txt"), 0);
    }

    #[test]
    fn test_remove_rules() {
        let mut fs = Storage::new();
        fs.seed_file("/gone.txt", b"x");
        assert_eq!(fs.remove("/gone.txt"), 1);
        assert_eq!(fs.remove("/gone.txt"), 0);

        fs.make_directory("/full");
        fs.seed_file("/full/keep.txt", b"x");
        assert_eq!(fs.remove("/full"), 0);
        fs.remove("/full/keep.txt");
        assert_eq!(fs.remove("/full"), 1);
        assert_eq!(fs.remove("/"), 0);
    }

    #[test]
    fn test_directory_listing() {
        let mut fs = Storage::new();
        fs.make_directory("/data");
        fs.seed_file("/data/beta.txt", b"");
        fs.seed_file("/data/alpha.sub", b"");
        fs.make_directory("/data/sub");
        fs.seed_file("/data/sub/inner.txt", b"");

        let mut name = [0u8; 32];
        let (ok, n) = fs.directory_item_by_index("/data", true, 0, &mut name);
        assert_eq!((ok, &name[..n as usize]), (1, &b"alpha.sub"[..]));

        let (ok, n) = fs.directory_item_by_index("/data", false, 1, &mut name);
        assert_eq!((ok, &name[..n as usize]), (1, &b"beta"[..]));

        let (ok, n) = fs.directory_item_by_index("/data", true, 2, &mut name);
        assert_eq!((ok, &name[..n as usize]), (1, &b"sub"[..]));

        assert_eq!(fs.directory_item_by_index("/data", true, 3, &mut name), (0, 0));
        assert_eq!(fs.directory_item_by_index("/nope", true, 0, &mut name), (0, 0));
    }

    #[test]
    fn test_volume_info_tracks_usage() {
        let mut fs = Storage::new();
        let (free_before, total) = fs.volume_info();
        assert_eq!(total, VOLUME_TOTAL_KB);
        assert_eq!(free_before, VOLUME_TOTAL_KB);

        fs.seed_file("/big.bin", &vec![0u8; 2048]);
        let (free_after, _) = fs.volume_info();
        assert_eq!(free_after, VOLUME_TOTAL_KB - 2);
    }

    #[test]
    fn test_pre_allocate_counts_against_volume() {
        let mut fs = Storage::new();
        let h = fs.open("/res.bin", 1);
        assert_eq!(fs.pre_allocate(h, 4096), 1);
        assert_eq!(fs.pre_allocate(h, -1), 0);
        let (free, _) = fs.volume_info();
        assert_eq!(free, VOLUME_TOTAL_KB - 4);
    }
}
