//! FitJobs - job board for the sports and fitness industry

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }
    dioxus::launch(fitjobs_web::App);
}
