/// Runs `$block`, and when `LOG_PERFORMANCE` is on, warns if it took longer than `$limit_micros`.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $limit_micros:expr, $block:block) => {{
        if !$crate::config::LOG_PERFORMANCE {
            $block
        } else {
            let started = std::time::Instant::now();
            let out = $block;
            let took = started.elapsed();
            if took > std::time::Duration::from_micros($limit_micros) {
                log::warn!(
                    "🐢 slow stage '{}': {:?} (limit {}µs, {} build)",
                    $name,
                    took,
                    $limit_micros,
                    if cfg!(debug_assertions) { "debug" } else { "release" }
                );
            }
            out
        }
    }};
}
