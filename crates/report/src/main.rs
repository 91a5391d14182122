fn main() {
    stocktally_observability::init();

    if let Err(err) = stocktally_report::run() {
        tracing::error!("report failed: {err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
