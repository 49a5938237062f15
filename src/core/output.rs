use std::time::Duration;

pub fn throw_line(hammer_id: usize, throw: usize, elapsed: Duration) -> String {
    format!(
        "Hammer: {}, Throw:    {}, Elapsed Time: {:.2}",
        hammer_id,
        throw,
        elapsed.as_secs_f64()
    )
}

pub fn hammer_average_line(hammer_id: usize, average: Duration) -> String {
    format!(
        "Hammer: {}, AVERAGE    , Elapsed Time: {:.2}",
        hammer_id,
        average.as_secs_f64()
    )
}

pub fn total_average_line(average: Duration) -> String {
    format!("TOTAL AVERAGE ELAPSED TIME: {}", average.as_secs_f64())
}
