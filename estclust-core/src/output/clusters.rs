//! The final cluster report.

use std::io::Write;

use crate::cluster::Clustering;
use crate::config::ClusterConfig;
use crate::output::write_sequence;
use crate::sequence::Sequence;
use crate::types::EstError;

/// Writes numbered cluster listings, then the unclustered leftovers.
///
/// Every member renders as ` index: ` followed by its name alone or the
/// whole sequence in the configured print mode; a blank line closes
/// each cluster and the final listing.
pub fn write_clusters<W: Write>(
    writer: &mut W,
    clustering: &Clustering,
    sequences: &[Sequence],
    config: &ClusterConfig,
) -> Result<(), EstError> {
    for (k, cluster) in clustering.clusters.iter().enumerate() {
        writeln!(writer, "Cluster {k}")?;
        for &i in cluster {
            write_member(writer, i, &sequences[i], config)?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "Unclustered sequences:")?;
    for &i in &clustering.unclustered {
        write_member(writer, i, &sequences[i], config)?;
    }
    writeln!(writer)?;

    Ok(())
}

fn write_member<W: Write>(
    writer: &mut W,
    index: usize,
    seq: &Sequence,
    config: &ClusterConfig,
) -> Result<(), EstError> {
    write!(writer, " {index}: ")?;
    if config.names_only {
        writeln!(writer, "{}", seq.name())?;
    } else {
        write_sequence(writer, seq, config.output_mode, config.wrap)?;
        writeln!(writer)?;
    }
    Ok(())
}
