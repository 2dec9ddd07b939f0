//! Per-frame widget pass benchmark.
//!
//! Run with: `cargo bench --package quickdraw_ui`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quickdraw_ui::{Event, IdAllocator, Ui, WidgetId};

/// Widgets per row in the benchmark grid.
const COLUMNS: i32 = 10;

fn bench_widget_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("widget_pass");

    for count in [10, 100, 1000] {
        let mut ids = IdAllocator::new();
        let button_ids: Vec<WidgetId> = (0..count).map(|_| ids.alloc()).collect();

        let mut ui = Ui::new();
        ui.handle_event(&Event::PointerMoved { x: 10, y: 10 });

        group.bench_function(format!("buttons_{count}"), |b| {
            b.iter(|| {
                ui.begin_frame();
                for (i, &id) in button_ids.iter().enumerate() {
                    let i = i as i32;
                    let x = (i % COLUMNS) * 80;
                    let y = (i / COLUMNS) * 64;
                    black_box(ui.button(id, x, y));
                }
                ui.end_frame();
                black_box(ui.draw_list().len())
            });
        });
    }

    group.finish();
}

fn bench_slider_drag(c: &mut Criterion) {
    let mut ui = Ui::new();
    let id = WidgetId::new(1);
    ui.handle_event(&Event::PointerMoved { x: 10, y: 108 });
    ui.handle_event(&Event::ButtonDown(quickdraw_ui::MouseButton::Left));

    let mut value = 0;
    c.bench_function("slider_drag", |b| {
        b.iter(|| {
            ui.begin_frame();
            let response = ui.slider(id, 0, 0, 255, black_box(value));
            ui.end_frame();
            if response.changed {
                value = response.value;
            }
            black_box(value)
        });
    });
}

criterion_group!(benches, bench_widget_pass, bench_slider_drag);
criterion_main!(benches);
