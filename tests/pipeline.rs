use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tempfile::{NamedTempFile, TempDir};

use eigentrack::error::TrackError;
use eigentrack::input::{load_tracks, load_values};
use eigentrack::layout::{plot_tracks, render_png, render_svg, Layout, LayoutOptions};
use eigentrack::{FillRect, GenomicRange, InvalidSeriesError, Rgb};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[fixture]
fn signal_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "pc1.txt", "# chr1 eigenvector\n0\n2\n\n4\n6\n8\n");
    write_file(&dir, "pc2.txt", "0\t-1.5\n100\t0.5\n200\t1.0\n");
    dir
}

#[fixture]
fn options() -> LayoutOptions {
    LayoutOptions {
        width: 10,
        track_height: 40,
        ..LayoutOptions::default()
    }
}

#[rstest]
fn values_skip_comments_and_take_last_column(signal_dir: TempDir) {
    let values = load_values(&signal_dir.path().join("pc1.txt")).unwrap();
    assert_eq!(values, vec![0.0, 2.0, 4.0, 6.0, 8.0]);

    let values = load_values(&signal_dir.path().join("pc2.txt")).unwrap();
    assert_eq!(values, vec![-1.5, 0.5, 1.0]);
}

#[rstest]
fn parse_errors_name_the_line() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1.0\n2.0\nnot-a-number").unwrap();

    match load_values(file.path()) {
        Err(TrackError::Parse { line, token, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(token, "not-a-number");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[rstest]
fn tracks_keep_input_order_and_names(signal_dir: TempDir) {
    let paths = vec![signal_dir.path().join("pc2.txt"), signal_dir.path().join("pc1.txt")];
    let tracks = load_tracks(&paths, 100.0).unwrap();

    let names: Vec<&str> = tracks.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["pc2", "pc1"]);
    assert_eq!(tracks[1].extent(), 500.0);
}

#[rstest]
fn empty_input_is_an_invalid_series(signal_dir: TempDir) {
    let empty = write_file(&signal_dir, "empty.txt", "# nothing here\n");
    match load_tracks(&[empty.clone()], 1.0) {
        Err(TrackError::InvalidSeries { path, source }) => {
            assert_eq!(path, empty);
            assert_eq!(source, InvalidSeriesError::Empty);
        }
        other => panic!("unexpected result: {:?}", other.map(|t| t.len())),
    }
}

#[rstest]
fn non_finite_input_is_rejected(signal_dir: TempDir) {
    let bad = write_file(&signal_dir, "bad.txt", "1.0\nNaN\n");
    assert!(matches!(
        load_tracks(&[bad], 1.0),
        Err(TrackError::InvalidSeries {
            source: InvalidSeriesError::NonFinite { index: 1, .. },
            ..
        })
    ));
}

#[rstest]
fn layout_spans_whole_signal_by_default(signal_dir: TempDir, options: LayoutOptions) {
    let tracks = load_tracks(&[signal_dir.path().join("pc1.txt")], 2.0).unwrap();
    let layout = Layout::new(&tracks, &options).unwrap();

    assert_eq!(layout.frame.bp_per_pixel(), 1.0);
    assert_eq!(layout.names_width, 3 * layout.char_size + 6);
    assert_eq!(layout.total_width, layout.names_width + 10);
    assert_eq!(layout.total_height, 40);
}

#[rstest]
fn bars_stay_inside_their_rows(signal_dir: TempDir, options: LayoutOptions) {
    let paths = vec![signal_dir.path().join("pc1.txt"), signal_dir.path().join("pc2.txt")];
    let tracks = load_tracks(&paths, 4.0).unwrap();
    let layout = Layout::new(&tracks, &options).unwrap();

    let mut out: Vec<FillRect> = Vec::new();
    plot_tracks(&tracks, &layout, &mut out);

    assert!(!out.is_empty());
    for fill in &out {
        let row = (fill.rect.y as u32 / 40) as usize;
        let bounds = layout.track_bounds(row.min(1));
        assert!(fill.rect.x >= bounds.x && fill.rect.right() <= bounds.right());
        assert!(fill.rect.y >= bounds.y && fill.rect.bottom() <= bounds.bottom());
    }
}

#[rstest]
fn zoomed_range_clips_to_plot_area(signal_dir: TempDir) {
    let tracks = load_tracks(&[signal_dir.path().join("pc1.txt")], 10.0).unwrap();
    let opts = LayoutOptions {
        width: 10,
        track_height: 40,
        range: Some(GenomicRange { start: 15.0, end: 35.0 }),
        show_names: false,
        ..LayoutOptions::default()
    };
    let layout = Layout::new(&tracks, &opts).unwrap();

    let mut out: Vec<FillRect> = Vec::new();
    plot_tracks(&tracks, &layout, &mut out);

    // columns: 0 -> -8, 10 -> -3, 20 -> 2, 30 -> 7, 40 -> 12
    let spans: Vec<(i32, u32)> = out.iter().map(|f| (f.rect.x, f.rect.width)).collect();
    assert_eq!(spans, vec![(0, 2), (2, 5), (7, 3)]);
}

#[rstest]
fn narrow_zoom_into_a_coarse_series_stays_in_the_plot_area() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "pc1.txt", "0.1\n-0.2\n0.3\n0.4\n");
    let tracks = load_tracks(&[path], 100_000_000.0).unwrap();
    let opts = LayoutOptions {
        width: 1000,
        track_height: 40,
        range: Some("100000000-100000010".parse().unwrap()),
        show_names: false,
        ..LayoutOptions::default()
    };
    let layout = Layout::new(&tracks, &opts).unwrap();

    let mut out: Vec<FillRect> = Vec::new();
    plot_tracks(&tracks, &layout, &mut out);

    // bins land at i32::MIN, 0, i32::MAX, i32::MAX
    let spans: Vec<(i32, u32)> = out.iter().map(|f| (f.rect.x, f.rect.width)).collect();
    assert_eq!(spans, vec![(0, 1000)]);
    let bounds = layout.track_bounds(0);
    for fill in &out {
        assert!(fill.rect.x >= bounds.x && fill.rect.right() <= bounds.right());
        assert!(fill.rect.y >= bounds.y && fill.rect.bottom() <= bounds.bottom());
    }
}

#[rstest]
fn oversized_layouts_are_rejected(signal_dir: TempDir) {
    let paths = vec![signal_dir.path().join("pc1.txt"), signal_dir.path().join("pc2.txt")];
    let tracks = load_tracks(&paths, 1.0).unwrap();
    let opts = LayoutOptions {
        width: 10,
        track_height: u32::MAX,
        show_names: false,
        ..LayoutOptions::default()
    };
    let err = Layout::new(&tracks, &opts).unwrap_err();
    assert!(matches!(err, TrackError::LayoutTooLarge { height, .. } if height == 2 * u32::MAX as u64));
}

#[rstest]
fn png_has_bars_and_labels(signal_dir: TempDir, options: LayoutOptions) {
    let tracks = load_tracks(&[signal_dir.path().join("pc1.txt")], 2.0).unwrap();
    let layout = Layout::new(&tracks, &options).unwrap();
    let img = render_png(&tracks, &layout);

    assert_eq!(img.dimensions(), (layout.total_width, layout.total_height));
    let has = |color: Rgb| img.pixels().any(|p| p.0 == [color.0, color.1, color.2]);
    assert!(has(Rgb::TRACK_BLUE));
    assert!(has(Rgb::BLACK));
}

#[rstest]
fn svg_output_is_written(signal_dir: TempDir, options: LayoutOptions) {
    let mut tracks = load_tracks(&[signal_dir.path().join("pc2.txt")], 1.0).unwrap();
    tracks[0].set_color(Rgb(10, 20, 30));
    let layout = Layout::new(&tracks, &options).unwrap();
    let svg = render_svg(&tracks, &layout);

    assert!(svg.contains("rgb(10,20,30)"));
    assert!(svg.contains(">pc2</text>"));
}
