// benches/match_list.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use match_panel::{
    data::{Dataset, ListTab, match_view},
    specs::match_list,
};

/// Synthetic fixtures page: `n` classed rows plus some noise rows.
fn sample_page(n: usize) -> String {
    let mut doc = String::from("<html><body><table id=\"table_live\">");
    for i in 0..n {
        doc.push_str(&format!(
            "<tr id=\"tr1_{id}\"><td class=\"time\" data-t=\"2025-03-{d:02} {h:02}:00:00\">{h:02}:00</td>\
             <td class=\"home\"><a>Home {i}</a></td><td class=\"score\">-</td>\
             <td class=\"away\"><a>Away {i}</a></td><td class=\"handicap\">-0.25</td>\
             <td class=\"goal-line\">2.5</td></tr>\
             <tr class=\"ad\"><td colspan=\"6\">ad</td></tr>",
            id = 1_000_000 + i,
            d = 1 + i % 28,
            h = i % 24,
        ));
    }
    doc.push_str("</table></body></html>");
    doc
}

fn bench_match_list(c: &mut Criterion) {
    let doc = sample_page(400);

    c.bench_function("match_list_parse", |b| {
        b.iter(|| {
            let rows = match_list::parse_doc(black_box(&doc), usize::MAX);
            black_box(rows.len())
        })
    });

    let ds = Dataset {
        upcoming: match_list::parse_doc(&doc, usize::MAX).iter().map(|r| r.to_match()).collect(),
        finished: Vec::new(),
    };
    c.bench_function("match_view_search", |b| {
        b.iter(|| {
            let view = match_view(black_box(&ds), ListTab::All, black_box("home 1"));
            black_box(view.len())
        })
    });
}

criterion_group!(benches, bench_match_list);
criterion_main!(benches);
