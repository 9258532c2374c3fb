//! Minimum cut over a parsed edge list

use rand::rngs::StdRng;
use rand::SeedableRng;
use wayfind_core::config::MinCutConfig;
use wayfind_core::input::parse_edge_list;

const WIRING: &str = "\
jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr
";

fn crossing_pairs(cut: &wayfind_core::graph::MinCut<String, u64>) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = cut
        .edges
        .iter()
        .map(|e| {
            let (a, b) = (e.source.element().clone(), e.destination.element().clone());
            if a < b {
                (a, b)
            } else {
                (b, a)
            }
        })
        .collect();
    pairs.sort();
    pairs
}

#[test]
fn test_wiring_graph_shape() {
    let graph = parse_edge_list(WIRING).unwrap();
    assert_eq!(graph.vertex_count(), 15);
    assert_eq!(graph.edge_count(), 33);
}

#[test]
fn test_wiring_cut_seeded() {
    let graph = parse_edge_list(WIRING).unwrap();
    let mut rng = StdRng::seed_from_u64(2023);

    let cut = graph.minimum_cut_with_rng(2000, &mut rng).unwrap();

    assert_eq!(cut.size, 3);
    assert_eq!(
        crossing_pairs(&cut),
        vec![
            ("bvb".to_string(), "cmg".to_string()),
            ("hfx".to_string(), "pzl".to_string()),
            ("jqt".to_string(), "nvd".to_string()),
        ]
    );

    let mut sizes: Vec<usize> = cut.groups.iter().map(Vec::len).collect();
    sizes.sort();
    assert_eq!(sizes, vec![6, 9]);
    assert_eq!(cut.group_product(), 54);
}

#[test]
fn test_wiring_cut_from_config() {
    let graph = parse_edge_list(WIRING).unwrap();
    let config = MinCutConfig::default().with_iterations(2000).with_parallel(true);

    let cut = graph.minimum_cut_with(&config).unwrap();
    assert_eq!(cut.size, 3);
    assert_eq!(cut.group_product(), 54);
}

#[test]
fn test_cut_does_not_touch_input_graph() {
    let graph = parse_edge_list(WIRING).unwrap();
    let before = graph.to_string();

    graph.minimum_cut(5);

    assert_eq!(graph.to_string(), before);
}
