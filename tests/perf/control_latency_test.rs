use std::time::{Duration, Instant};

use crate::config::Options;
use crate::control::GeocoderControl;
use crate::language::StaticLocaleProvider;
use crate::marker::RecordingMapHost;
use crate::model::{Feature, LngLat};

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

// One cycle: a keystroke burst, the debounced dispatch, a resolved
// response and a clear. The whole cycle is synchronous state handling
// and must stay well inside a frame budget.
fn run_cycle(control: &mut GeocoderControl, base: Instant) {
    let text = "toronto ontario";
    for end in 1..=text.len() {
        control.on_key_down(crate::control::Key::Other);
        control.on_text_changed(&text[..end], base + Duration::from_millis(end as u64));
    }

    let request = control
        .poll(base + Duration::from_secs(5))
        .expect("burst should leave one dispatch due");
    control.handle_response(
        request.sequence,
        Ok(vec![Feature::new(
            "poi.1",
            "Toronto, Ontario",
            LngLat::new(-79.38, 43.65),
        )]),
    );
    control.clear();
    control.drain_events();
}

#[test]
fn keystroke_burst_p95_under_5ms() {
    let locales = StaticLocaleProvider::new(&[]);
    let mut control = GeocoderControl::new(
        Options::default(),
        &locales,
        Box::new(RecordingMapHost::default()),
    )
    .expect("default options should validate");

    let base = Instant::now();
    for _ in 0..30 {
        run_cycle(&mut control, base);
    }

    let mut batch_p95 = Vec::with_capacity(5);
    for _ in 0..5 {
        let mut samples = Vec::with_capacity(80);
        for _ in 0..80 {
            let start = Instant::now();
            run_cycle(&mut control, base);
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
        }
        batch_p95.push(p95_ms(&mut samples));
    }

    batch_p95.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median_p95 = batch_p95[batch_p95.len() / 2];

    assert!(
        median_p95 <= 5.0,
        "median batch p95 too high: {median_p95:.3}ms (budget 5.0ms); batches={batch_p95:?}",
    );
}
