//! Presentation views of a finished social network.

use std::fmt;

use crate::network::expander::{Hop, SocialNetwork};

/// Words per row in the tabulated report.
pub const REPORT_COLUMNS: usize = 10;

/// Name of the file a network is written to.
pub fn report_file_name(origin: &str) -> String {
    format!("{origin}_SocialNetwork.txt")
}

impl SocialNetwork {
    /// Tabulated report of the three groups, each sorted lexicographically.
    pub fn to_sorted_report(&self) -> String {
        self.to_string()
    }

    /// Header naming the origin followed by the sorted network, one word per
    /// line.
    pub fn to_file_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.size() + 1);
        lines.push(format!("The Social Network for {} is:", self.origin()));
        lines.extend(self.sorted_network().into_iter().map(str::to_string));
        lines
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The Social Network for {} consists of:", self.origin())?;

        for (i, hop) in Hop::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{hop}:")?;
            for row in self.sorted_level(hop).chunks(REPORT_COLUMNS) {
                writeln!(f, "{}", row.join("\t"))?;
            }
        }

        Ok(())
    }
}
