//! # foldpair-core
//!
//! In-memory model for turning a two-column protein sheet into AlphaFold Server jobs.
//!
//! __foldpair-core__ provides:
//! * [`Table`] - the ordered `(name, sequence)` rows loaded from a sheet
//! * [`resolve_target`] - lookup of the target protein's sequence
//! * [`Pairs`] - one [`JobRecord`] per non-target row, in table order
//!
//! Reading sheets and writing job files lives in `foldpair-io`.
//!
mod job;
mod pairing;
mod table;

pub use self::job::{
    JobRecord, JobSettings, ProteinChain, SequenceEntry, DATE_FORMAT, DEFAULT_MAX_TEMPLATE_DATE,
    DIALECT, VERSION,
};
pub use self::pairing::{resolve_target, PairError, Pairs};
pub use self::table::{Row, SheetFormat, Table};
