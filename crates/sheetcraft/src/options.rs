//! Tuning knobs for header lookup and row scanning

/// Options for resolving a column by its header text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverOptions {
    /// Extra header cells scanned past the row's reported extent.
    ///
    /// Workaround for host libraries that under-report the last column of a
    /// row they loaded; 0 scans exactly the reported extent.
    pub header_overscan: u16,
}

impl ResolverOptions {
    /// Options with a given overscan margin
    pub fn with_overscan(header_overscan: u16) -> Self {
        Self { header_overscan }
    }
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            header_overscan: 20,
        }
    }
}

/// Options for finding the data rows of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RowScanOptions {
    /// Leading cells checked when deciding whether a row is blank (default: 10)
    pub probe_columns: u16,
    /// Reported row counts above this are treated as bogus (default: 500 000)
    pub row_count_warning: u32,
    /// Rows walked forward from the top when the count is bogus (default: 100 000)
    pub fallback_scan_limit: u32,
}

impl Default for RowScanOptions {
    fn default() -> Self {
        Self {
            probe_columns: 10,
            row_count_warning: 500_000,
            fallback_scan_limit: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ResolverOptions::default().header_overscan, 20);
        assert_eq!(ResolverOptions::with_overscan(0).header_overscan, 0);

        let scan = RowScanOptions::default();
        assert_eq!(scan.probe_columns, 10);
        assert_eq!(scan.row_count_warning, 500_000);
        assert_eq!(scan.fallback_scan_limit, 100_000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config() {
        let opts: RowScanOptions = serde_json::from_str(r#"{"probe_columns": 3}"#).unwrap();
        assert_eq!(opts.probe_columns, 3);
        assert_eq!(opts.row_count_warning, 500_000);
    }
}
