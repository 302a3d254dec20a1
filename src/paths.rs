//! File-name derivation shared by the enumerator and the run controller.

use std::path::Path;

/// Recognized read-file extensions, in listing priority order.
pub const READ_EXTENSIONS: [&str; 2] = [".fq", ".fastq"];

pub const TRIM_SUFFIX: &str = ".trim.fastq";

const MATE2_TRIMMED: &str = "2.trim.fastq";
const SINGLES_TRIMMED: &str = "s.trim.fastq";

/// Drops the final `.`-delimited segment; names without a dot are returned whole.
pub fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => name,
    }
}

/// `reads.fq` -> `reads.trim.fastq`
pub fn single_end_output_name(name: &str) -> String {
    format!("{}{TRIM_SUFFIX}", strip_extension(name))
}

/// `s.1.fq` -> `s.2.fq`, replacing only the trailing `<sep>1<ext>` token.
/// `None` when `mate1` does not end in that token.
pub fn mate2_name(mate1: &str, sep: char, ext: &str) -> Option<String> {
    let stem = mate1_stem(mate1, sep, ext)?;
    Some(format!("{stem}{sep}2{ext}"))
}

/// `s.1.fq` -> `s.1.trim.fastq`
pub fn paired_output_name(name: &str, ext: &str) -> String {
    let stem = name.strip_suffix(ext).unwrap_or(name);
    format!("{stem}{TRIM_SUFFIX}")
}

/// `s.2.trim.fastq` -> `s.s.trim.fastq`.
///
/// Plain substring replacement: every occurrence of `2.trim.fastq` in the
/// name is rewritten, not only the trailing one.
pub fn singles_name(mate2_output: &str) -> String {
    mate2_output.replace(MATE2_TRIMMED, SINGLES_TRIMMED)
}

/// True only when every path is present on disk.
pub fn all_exist<P: AsRef<Path>>(paths: &[P]) -> bool {
    paths.iter().all(|p| p.as_ref().exists())
}

fn mate1_stem<'a>(name: &'a str, sep: char, ext: &str) -> Option<&'a str> {
    let rest = name.strip_suffix(ext)?;
    let rest = rest.strip_suffix('1')?;
    rest.strip_suffix(sep)
}
