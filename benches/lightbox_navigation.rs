// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for lightbox operations.
//!
//! Measures the performance of:
//! - Opening the lightbox (grid discovery + session build)
//! - Keyboard navigation (next with wraparound)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use page_lens::application::event::{Key, Route};
use page_lens::application::port::Page;
use page_lens::config::Config;
use page_lens::infrastructure::memory::{MemoryPage, NodeId};
use page_lens::infrastructure::ManualScheduler;
use page_lens::{Message, Site};
use std::hint::black_box;
use std::time::Duration;

const GRID_SIZES: [usize; 3] = [8, 64, 256];

/// Builds a page with one grid of `count` image items.
fn gallery_page(count: usize) -> (MemoryPage, Vec<NodeId>) {
    let page = MemoryPage::new();
    let grid = page.append(page.body_id(), "div", &["gallery-grid"]);
    let items = (0..count)
        .map(|i| {
            let item = page.append(grid, "div", &["gallery-item"]);
            let image = page.append(item, "div", &["gallery-image"]);
            page.set_computed_style(image, "background-image", &format!("url(\"img-{i}.jpg\")"));
            page.set_attribute(&item, "data-caption", &format!("Photo {i}"));
            item
        })
        .collect();
    (page, items)
}

/// Fires the pending fade swap so the scheduler queue stays bounded.
fn fire_due(site: &mut Site<NodeId>, page: &MemoryPage, scheduler: &mut ManualScheduler) {
    for task in scheduler.advance(Duration::from_millis(200)) {
        site.update(page, scheduler, Message::Timer(task));
    }
}

fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_open");

    for size in GRID_SIZES {
        let (page, items) = gallery_page(size);
        let mut scheduler = ManualScheduler::new();
        let (mut site, _) = Site::mount(&page, &mut scheduler, &Config::default());
        let middle = items[size / 2];

        group.bench_with_input(BenchmarkId::from_parameter(size), &middle, |b, item| {
            b.iter(|| {
                let click = Message::click(Route::GalleryItem, *item);
                site.update(&page, &mut scheduler, click);
                fire_due(&mut site, &page, &mut scheduler);
                site.update(&page, &mut scheduler, Message::KeyPressed(Key::Escape));
                black_box(&site);
            });
        });
    }

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigate");

    for size in GRID_SIZES {
        let (page, items) = gallery_page(size);
        let mut scheduler = ManualScheduler::new();
        let (mut site, _) = Site::mount(&page, &mut scheduler, &Config::default());
        let click = Message::click(Route::GalleryItem, items[0]);
        site.update(&page, &mut scheduler, click);

        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                site.update(&page, &mut scheduler, Message::KeyPressed(Key::ArrowRight));
                fire_due(&mut site, &page, &mut scheduler);
                black_box(site.lightbox().and_then(|l| l.current_index()));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_open, bench_navigate);
criterion_main!(benches);
