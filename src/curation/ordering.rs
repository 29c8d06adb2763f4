use crate::config::CurationConfig;
use crate::types::Program;

pub trait ProgramRanker {
    /// Lower ranks sort first.
    fn rank(&self, program: &Program) -> u32;
}

impl ProgramRanker for CurationConfig {
    fn rank(&self, program: &Program) -> u32 {
        self.composite_rank(&program.name, &program.product_type)
    }
}

/// Remove every `non_conforming` program iff at least one program of another
/// family is present in the same set. Evaluated once over the whole set.
pub fn drop_non_conforming(programs: Vec<Program>, non_conforming: &str) -> Vec<Program> {
    let has_other_family = programs.iter().any(|p| p.product_type != non_conforming);
    if !has_other_family {
        return programs;
    }

    programs
        .into_iter()
        .filter(|p| p.product_type != non_conforming)
        .collect()
}

/// Stable sort by rank; equal ranks (including unranked) keep input order.
pub fn order_programs<R: ProgramRanker>(programs: &mut [Program], ranker: &R) {
    programs.sort_by_key(|p| ranker.rank(p));

    debug_assert!(programs
        .windows(2)
        .all(|w| ranker.rank(&w[0]) <= ranker.rank(&w[1])));
}
