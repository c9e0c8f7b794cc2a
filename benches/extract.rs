use criterion::{black_box, criterion_group, criterion_main, Criterion};

use surebet_scrape::config::options::ExtractOptions;
use surebet_scrape::core::HtmlTable;
use surebet_scrape::extract_records;

const GROUP: &str = r#"
  <tbody class="surebet_record">
    <tr>
      <td class="profit-box" rowspan="2"><span class="profit">2.3%</span><span class="age">5m</span></td>
      <td class="booker"><a>Bet365</a><span class="minor">Soccer</span></td>
      <td class="time">12:00<br>05/11</td>
      <td class="event" rowspan="2"><a>Team A vs Team B</a><span class="minor">League X</span></td>
      <td class="coeff">1X2</td>
      <td class="value"><a class="value_link">1.95</a></td>
    </tr>
    <tr>
      <td class="booker"><a>Pinnacle</a></td>
      <td class="time">12:00<br>05/11</td>
      <td class="coeff">1X2</td>
      <td class="value"><a class="value_link">2.05</a></td>
    </tr>
    <tr class="extra"><td colspan="6"></td></tr>
  </tbody>
"#;

/// A page with as many groups as a full surebets listing shows.
fn sample_page(groups: usize) -> String {
    let body: String = std::iter::repeat(GROUP).take(groups).collect();
    format!(r#"<html><body><table id="surebets-table">{body}</table></body></html>"#)
}

fn bench_extract(c: &mut Criterion) {
    let page = sample_page(100);
    let opts = ExtractOptions::default();

    c.bench_function("locate_table", |b| {
        b.iter(|| HtmlTable::locate(black_box(&page), "surebets-table").map(|t| t.rows().len()))
    });

    let table = HtmlTable::locate(&page, "surebets-table").expect("sample has the table");
    let rows = table.rows();
    c.bench_function("extract_records", |b| {
        b.iter(|| {
            let out = extract_records(black_box(&rows), &opts, None);
            black_box(out.records.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
