// prefs.rs — Options for the file-level decode driver.

/// Decoding preferences collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefs {
    /// Overwrite an existing destination file without asking.
    pub overwrite: bool,
    /// Delete the source file after a successful decode.
    pub remove_src_file: bool,
    /// Initial output capacity passed to the decoder.
    pub size_hint: Option<usize>,
    /// Reject blocks that decode to more than this many bytes.
    pub max_size: Option<usize>,
    /// Compute the XXH32 digest of the decoded output.
    pub content_checksum: bool,
}

impl Prefs {
    pub fn set_overwrite(&mut self, yes: bool) -> bool {
        self.overwrite = yes;
        self.overwrite
    }

    pub fn set_remove_src_file(&mut self, yes: bool) -> bool {
        self.remove_src_file = yes;
        self.remove_src_file
    }

    pub fn set_size_hint(&mut self, hint: Option<usize>) -> Option<usize> {
        self.size_hint = hint;
        self.size_hint
    }

    pub fn set_max_size(&mut self, limit: Option<usize>) -> Option<usize> {
        self.max_size = limit;
        self.max_size
    }

    pub fn set_content_checksum(&mut self, yes: bool) -> bool {
        self.content_checksum = yes;
        self.content_checksum
    }
}
