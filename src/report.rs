use crate::RankVector;
use std::fmt;

const RULE: &str = "***************************************************";

/// Console summary of one analysis.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub corpus: &'a str,
    pub samples: usize,
    pub sampled: &'a RankVector,
    pub iterated: &'a RankVector,
}

fn write_ranks(f: &mut fmt::Formatter<'_>, ranks: &RankVector) -> fmt::Result {
    for (page, rank) in ranks.iter() {
        writeln!(f, "  {page}: {rank:.4}")?;
    }
    Ok(())
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(f, "Analysis for web page:")?;
        writeln!(f, "{}", self.corpus)?;
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(f, "PageRank Results from Sampling (n = {})", self.samples)?;
        write_ranks(f, self.sampled)?;
        writeln!(f)?;
        writeln!(f, "PageRank Results from Iteration")?;
        write_ranks(f, self.iterated)?;
        writeln!(f)?;
        writeln!(f, "{RULE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_sorted_ranks() {
        let rv = |pairs: &[(&str, f64)]| -> RankVector {
            pairs.iter().map(|(p, r)| (p.to_string(), *r)).collect()
        };
        let sampled = rv(&[("b.html", 0.6), ("a.html", 0.4)]);
        let iterated = rv(&[("a.html", 0.41234), ("b.html", 0.58766)]);
        let out = Report {
            corpus: "corpus0",
            samples: 10_000,
            sampled: &sampled,
            iterated: &iterated,
        }
        .to_string();
        assert!(out.contains("Analysis for web page:\ncorpus0\n"));
        assert!(out.contains(
            "PageRank Results from Sampling (n = 10000)\n  a.html: 0.4000\n  b.html: 0.6000\n"
        ));
        assert!(out.contains(
            "PageRank Results from Iteration\n  a.html: 0.4123\n  b.html: 0.5877\n"
        ));
        assert!(out.ends_with(&format!("{RULE}\n")));
    }
}
