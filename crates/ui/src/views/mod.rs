mod progress;
mod quiz;
mod topics;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use progress::ProgressCard;
pub use quiz::QuizView;
pub use topics::TopicsView;
