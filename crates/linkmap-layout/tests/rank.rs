use linkmap_core::{GraphError, PageGraph, PageRecord, RootError, RootedView};
use linkmap_layout::rank::{rank_layers, unreachable};
use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};

fn make_graph() -> PageGraph {
    let records = vec![
        PageRecord::new("index", "Index", ["about", "blog", "index"]).index(),
        PageRecord::new("about", "About", ["team"]),
        PageRecord::new("blog", "Blog", ["post-1", "post-2", "about"]),
        PageRecord::new("team", "Team", ["index"]),
        PageRecord::new("post-1", "Post 1", ["post-2"]),
        PageRecord::new("post-2", "Post 2", ["post-1", "archive"]),
        PageRecord::new("archive", "Archive", Vec::<String>::new()),
        PageRecord::new("drafts", "Drafts", ["post-1"]),
    ];
    PageGraph::deserialize(&records).unwrap()
}

#[test]
fn test_rank_site() {
    let graph = make_graph();
    let layers = rank_layers(&graph, "index").unwrap();

    assert_eq!(
        layers.clone().into_inner(),
        vec![
            vec!["index"],
            vec!["about", "blog"],
            vec!["team", "post-1", "post-2"],
            vec!["archive"],
        ]
    );
    assert_eq!(unreachable(&graph, &layers), vec!["drafts"]);
}

#[test]
fn test_rank_from_rooted_view() {
    let records = make_graph()
        .to_records()
        .into_iter()
        .map(|r| if r.id.as_deref() == Some("blog") { r.index() } else { r })
        .collect::<Vec<_>>();
    let view = RootedView::from_records(&records).unwrap();
    let layers = rank_layers(view.graph(), view.root_id()).unwrap();

    assert_eq!(layers.layer(0).unwrap(), ["blog"]);
    assert_eq!(layers.layer_of("index"), Some(3));
}

#[test]
fn test_rank_is_deterministic() {
    let graph = make_graph();
    let first = rank_layers(&graph, "index").unwrap();
    for _ in 0..10 {
        assert_eq!(rank_layers(&graph, "index").unwrap(), first);
    }
}

#[test]
fn test_rank_unknown_root() {
    let graph = make_graph();
    assert_eq!(
        rank_layers(&graph, "missing").unwrap_err(),
        GraphError::MissingRoot(RootError::Absent("missing".to_string()))
    );
}

/// Reference shortest hop distances computed independently of the layer structure.
fn distances(graph: &PageGraph, root: &str) -> HashMap<String, usize> {
    let mut dist = HashMap::from([(root.to_string(), 0)]);
    let mut queue = VecDeque::from([root.to_string()]);
    while let Some(id) = queue.pop_front() {
        let d = dist[&id];
        for t in graph.links_of(&id).unwrap_or_default() {
            if !dist.contains_key(t) {
                dist.insert(t.clone(), d + 1);
                queue.push_back(t.clone());
            }
        }
    }
    dist
}

fn arb_graph() -> impl Strategy<Value = PageGraph> {
    (1usize..25).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0..n, 0..4), n).prop_map(move |adjacency| {
            let records: Vec<PageRecord> = adjacency
                .into_iter()
                .enumerate()
                .map(|(i, targets)| {
                    PageRecord::new(
                        format!("p{}", i),
                        format!("Page {}", i),
                        targets.into_iter().map(|t| format!("p{}", t)),
                    )
                })
                .collect();
            PageGraph::deserialize(&records).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn prop_layers_match_shortest_distance(graph in arb_graph()) {
        let layers = rank_layers(&graph, "p0").unwrap();
        let expected = distances(&graph, "p0");

        let root_layer = ["p0".to_string()];
        prop_assert_eq!(layers.layer(0).unwrap(), root_layer.as_slice());
        prop_assert_eq!(layers.page_count(), expected.len());
        for id in graph.ids() {
            prop_assert_eq!(layers.layer_of(id), expected.get(id).copied());
        }
        for layer in layers.iter() {
            prop_assert!(!layer.is_empty());
        }
        prop_assert!(layers.len() <= graph.len());
    }
}
