use grammar_core::{Catalog, ProgressState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub completed_label: String,
    pub percent: u8,
    pub percent_label: String,
}

#[must_use]
pub fn map_progress(catalog: &Catalog, progress: &ProgressState) -> ProgressVm {
    let total = catalog.topic_count();
    let percent = progress.percent(total);

    ProgressVm {
        completed_label: format!(
            "Завершено тем: {} из {}",
            progress.completed_count(),
            total
        ),
        percent,
        percent_label: format!("{percent}%"),
    }
}
