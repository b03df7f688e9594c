//! Command line input handling

/// Command line arguments
#[derive(clap::Parser)]
#[command(author, version, about, disable_help_subcommand = true)]
pub struct Args {
    /// The merge method to run
    #[arg()]
    pub method: Method,
    /// The data type to generate input lists from
    #[arg()]
    pub data: DataType,
    /// The number of sorted input lists
    #[arg(short, long, default_value_t = 16)]
    pub lists: usize,
    /// The number of runs to do
    #[arg(short, long, default_value_t = 1_000)]
    pub runs: usize,
    /// The total number of elements across all input lists
    #[arg(short, long, default_value_t = 1_000_000)]
    pub size: usize,
    /// Seed for the rng
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available merge methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Method {
    /// Cursor heap with single pass root replacement
    KWay,
    /// Concatenate all lists and sort the result
    ConcatSort,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
    }
}

impl Method {
    /// The merge function, filling `out` from `lists`
    pub fn merger<T: Ord + Clone>(self) -> fn(&[Vec<T>], &mut Vec<T>) {
        match self {
            Method::KWay => merge_k_way,
            Method::ConcatSort => merge_concat_sort,
        }
    }
}

/// Merge through the cursor heap engine
fn merge_k_way<T: Ord + Clone>(lists: &[Vec<T>], out: &mut Vec<T>) {
    kway_merge::merge::k_way_merge(lists.iter().map(Vec::as_slice), out);
}

/// The baseline, append everything and sort
fn merge_concat_sort<T: Ord + Clone>(lists: &[Vec<T>], out: &mut Vec<T>) {
    for list in lists {
        out.extend_from_slice(list);
    }
    out.sort();
}

/// Available data types for input generation
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum DataType {
    UniformU32,
    UniformU64,
    GaussianI64,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
    }
}
