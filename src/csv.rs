//! CSV serialization of trajectories.
//!
//! The integrators know nothing about output formats; this module is a
//! downstream consumer of [`Trajectory`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{Error, Trajectory};

/// Write a trajectory as CSV: a header row of labels followed by one row per
/// time point, each row holding the time value and the state components at
/// the given number of decimal digits.
///
/// `labels` must hold one heading for the time column plus one per state
/// variable.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] when the label count does not match, or
/// [`Error::Io`] on write failure.
pub fn write_csv<W: Write>(
    w: &mut W,
    traj: &Trajectory,
    labels: &[String],
    precision: usize,
) -> Result<(), Error> {
    let ncols = traj.x[0].len() + 1;
    if labels.len() != ncols {
        return Err(Error::DimensionMismatch(labels.len(), ncols));
    }

    writeln!(w, "{}", labels.join(","))?;
    for (t, x) in traj.t.iter().zip(&traj.x) {
        write!(w, "{t:.precision$}")?;
        for v in x {
            write!(w, ",{v:.precision$}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// [`write_csv`] to a file path, buffered.
pub fn write_csv_file<P: AsRef<Path>>(
    path: P,
    traj: &Trajectory,
    labels: &[String],
    precision: usize,
) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);
    write_csv(&mut w, traj, labels, precision)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Trajectory {
        Trajectory {
            t: vec![0.0, 1.0],
            x: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            nfev: 2,
            naccpt: 1,
            nrejct: 0,
            status: Status::Success,
        }
    }

    #[test]
    fn header_then_one_row_per_point() {
        let mut out = Vec::new();
        write_csv(&mut out, &sample(), &labels(&["t", "a", "b"]), 3).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "t,a,b\n0.000,1.000,2.000\n1.000,3.000,4.000\n");
    }

    #[test]
    fn rejects_wrong_label_count() {
        let mut out = Vec::new();
        let err = write_csv(&mut out, &sample(), &labels(&["t", "a"]), 3).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch(2, 3)));
    }
}
