use proptest::prelude::*;
use seamresize::{
    compute_energy, compute_vertical_cost, find_minimal_vertical_seam, Grid, Pixel, RasterImage,
    SeamCarver,
};

fn arb_image() -> impl Strategy<Value = RasterImage> {
    (1u32..8, 1u32..8).prop_flat_map(|(w, h)| {
        prop::collection::vec((0i32..256, 0i32..256, 0i32..256), (w * h) as usize).prop_map(
            move |pixels| {
                let mut img = RasterImage::new(w, h);
                for (i, (r, g, b)) in pixels.into_iter().enumerate() {
                    let i = i as u32;
                    img.set_pixel(i / w, i % w, Pixel::new(r, g, b));
                }
                img
            },
        )
    })
}

// Narrow value range so that ties are common.
fn arb_grid() -> impl Strategy<Value = Grid<i32>> {
    (1u32..9, 1u32..9).prop_flat_map(|(w, h)| {
        prop::collection::vec(0i32..4, (w * h) as usize).prop_map(move |cells| {
            let mut grid = Grid::new(w, h);
            for (i, v) in cells.into_iter().enumerate() {
                let i = i as u32;
                grid[(i / w, i % w)] = v;
            }
            grid
        })
    })
}

proptest! {
    #[test]
    fn argmin_picks_the_lowest_tied_column(
        cells in prop::collection::vec(-3i32..3, 1..12),
        a in 0usize..12,
        b in 0usize..12,
    ) {
        let width = cells.len();
        let (start, end) = (a.min(b) % width, (a.max(b) % width) + 1);
        prop_assume!(start < end);

        let mut grid = Grid::new(width as u32, 1);
        for (c, v) in cells.iter().enumerate() {
            grid[(0, c as u32)] = *v;
        }
        let col = grid.argmin_in_row(0, start as u32, end as u32) as usize;
        let min = *cells[start..end].iter().min().unwrap();

        prop_assert!(col >= start && col < end);
        prop_assert_eq!(cells[col], min);
        prop_assert!(cells[start..col].iter().all(|&v| v > min));
        prop_assert_eq!(grid.min_in_row(0, start as u32, end as u32), min);
    }

    #[test]
    fn seam_is_connected_and_minimal(energy in arb_grid()) {
        let cost = compute_vertical_cost(&energy);
        let seam = find_minimal_vertical_seam(&cost);

        prop_assert_eq!(seam.len(), energy.height() as usize);
        prop_assert!(seam.iter().all(|&c| c < energy.width()));
        prop_assert!(seam.windows(2).all(|w| (w[0] as i64 - w[1] as i64).abs() <= 1));

        let total: i32 = seam
            .iter()
            .enumerate()
            .map(|(row, &col)| energy[(row as u32, col)])
            .sum();
        let bottom = energy.height() - 1;
        prop_assert_eq!(total, cost.min_in_row(bottom, 0, energy.width()));
    }

    #[test]
    fn border_energy_is_the_interior_maximum(img in arb_image()) {
        let energy = compute_energy(&img);
        let (w, h) = (img.width(), img.height());
        let is_border = |r: u32, c: u32| r == 0 || c == 0 || r == h - 1 || c == w - 1;

        let mut interior_max = 0i32;
        for r in 0..h {
            for c in 0..w {
                if !is_border(r, c) {
                    interior_max = interior_max.max(energy[(r, c)]);
                }
            }
        }
        for r in 0..h {
            for c in 0..w {
                if is_border(r, c) {
                    prop_assert_eq!(energy[(r, c)], interior_max);
                }
            }
        }
    }

    #[test]
    fn text_round_trip(img in arb_image()) {
        let mut text = Vec::new();
        img.write(&mut text).unwrap();
        let back = RasterImage::read(&text[..]).unwrap();
        prop_assert_eq!(back, img);
    }

    #[test]
    fn carving_width_twice_changes_nothing(img in arb_image(), cut in 0u32..8) {
        let mut img = img;
        let target = img.width().saturating_sub(cut).max(1);
        let carver = SeamCarver::new();

        carver.carve_width(&mut img, target);
        prop_assert_eq!(img.width(), target);
        let once = img.clone();
        carver.carve_width(&mut img, target);
        prop_assert_eq!(img, once);
    }

    #[test]
    fn carving_keeps_the_other_dimension(img in arb_image(), w in 1u32..8, h in 1u32..8) {
        let mut img = img;
        let (w, h) = (w.min(img.width()), h.min(img.height()));
        seamresize::seamcarve(&mut img, w, h).unwrap();
        prop_assert_eq!((img.width(), img.height()), (w, h));
    }
}
