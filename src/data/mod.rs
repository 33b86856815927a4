/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  named columns of CellValue, row snapshots
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
