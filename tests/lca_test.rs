use ristretto::{DirectedValueGraph, NaiveLcaFinder, Ontology};

/// Beer -> IPA -> {West Coast IPA -> {Goose Island, Titan}, New England IPA -> Cloudwater}
fn beers() -> Ontology<&'static str, &'static str> {
    let mut builder = Ontology::builder();
    builder
        .add_axiom("IPA", "is_a", "Beer")
        .add_axiom("WestCoastIPA", "is_a", "IPA")
        .add_axiom("NewEnglandIPA", "is_a", "IPA")
        .add_axiom("CloudwaterIPA", "is_a", "NewEnglandIPA")
        .add_axiom("GooseIsland", "is_a", "WestCoastIPA")
        .add_axiom("TitanIPA", "is_a", "WestCoastIPA");
    builder.build()
}

#[test]
fn test_find_lca() {
    let ontology = beers();
    let finder = NaiveLcaFinder::new(&ontology);

    assert_eq!(finder.find_lca(&"TitanIPA", &"GooseIsland"), Ok(Some(&"WestCoastIPA")));
    assert_eq!(finder.find_lca(&"CloudwaterIPA", &"GooseIsland"), Ok(Some(&"IPA")));
    assert_eq!(finder.find_lca(&"Beer", &"IPA"), Ok(Some(&"Beer")));
    assert_eq!(finder.find_lca(&"CloudwaterIPA", &"NewEnglandIPA"), Ok(Some(&"NewEnglandIPA")));
    assert_eq!(finder.find_lca(&"TitanIPA", &"TitanIPA"), Ok(Some(&"TitanIPA")));
}

#[test]
fn test_find_lca_is_symmetric_on_trees() {
    let ontology = beers();
    let finder = NaiveLcaFinder::new(&ontology);

    for a in ontology.nodes() {
        for b in ontology.nodes() {
            assert_eq!(finder.find_lca(a, b), finder.find_lca(b, a));
        }
    }
}

#[test]
fn test_find_lca_set_on_tree() {
    let ontology = beers();
    let finder = NaiveLcaFinder::new(&ontology);

    let lcas: Vec<_> = finder
        .find_lca_set(&"CloudwaterIPA", &"GooseIsland")
        .unwrap()
        .into_iter()
        .copied()
        .collect();
    assert_eq!(lcas, vec!["IPA"]);
}

#[test]
fn test_unknown_term() {
    let ontology = beers();
    let finder = NaiveLcaFinder::new(&ontology);

    assert!(finder.find_lca(&"Stout", &"IPA").is_err());
    assert!(finder.find_lca_set(&"IPA", &"Stout").is_err());
    assert!(ontology.lca(&"Stout", &"Stout").is_err());
}

#[test]
fn test_disconnected_components() {
    let mut builder = Ontology::builder();
    builder
        .add_axiom("IPA", "is_a", "Beer")
        .add_axiom("Merlot", "is_a", "Wine");
    let ontology = builder.build();

    assert_eq!(ontology.lca(&"IPA", &"Merlot"), Ok(None));
    assert!(ontology.lca_set(&"IPA", &"Merlot").unwrap().is_empty());
}

/// Diamond with two incomparable lowest common ancestors.
#[test]
fn test_find_lca_set_with_several_lowest() {
    let mut builder = Ontology::builder();
    builder
        .add_axiom("Hazy", "is_a", "Beer")
        .add_axiom("Sour", "is_a", "Beer")
        .add_axiom("HazySour", "is_a", "Hazy")
        .add_axiom("HazySour", "is_a", "Sour")
        .add_axiom("MilkshakeSour", "is_a", "Hazy")
        .add_axiom("MilkshakeSour", "is_a", "Sour");
    let ontology = builder.build();

    let lcas = ontology.lca_set(&"HazySour", &"MilkshakeSour").unwrap();
    assert_eq!(lcas.len(), 2);
    assert!(lcas.contains(&"Hazy"));
    assert!(lcas.contains(&"Sour"));

    // one of them, the first discovered
    assert_eq!(ontology.lca(&"HazySour", &"MilkshakeSour"), Ok(Some(&"Hazy")));
}

/// `find_lca` returns *a* common ancestor, not necessarily a lowest one.
///
/// `a` reaches the top term `R` in one step, while its path to the lower
/// common ancestor `L` is two steps long; `b` reaches `R` in two steps and
/// `L` in three. The synchronized expansion meets at `R` first.
#[test]
fn test_find_lca_may_miss_the_lowest_on_uneven_dags() {
    let mut builder = Ontology::builder();
    builder
        .add_axiom("a", "is_a", "R")
        .add_axiom("a", "is_a", "p1")
        .add_axiom("p1", "is_a", "L")
        .add_axiom("L", "is_a", "R")
        .add_axiom("b", "is_a", "s")
        .add_axiom("b", "is_a", "t1")
        .add_axiom("s", "is_a", "R")
        .add_axiom("t1", "is_a", "t2")
        .add_axiom("t2", "is_a", "L");
    let ontology = builder.build();
    let finder = NaiveLcaFinder::new(&ontology);

    let found = finder.find_lca(&"a", &"b").unwrap();
    assert_eq!(found, Some(&"R"));
    // still a common ancestor
    assert!(ontology.ancestors(&"a").unwrap().contains(&"R"));
    assert!(ontology.ancestors(&"b").unwrap().contains(&"R"));

    // the full search finds the lowest one
    let lcas: Vec<_> = finder.find_lca_set(&"a", &"b").unwrap().into_iter().copied().collect();
    assert_eq!(lcas, vec!["L"]);
}

#[test]
fn test_finder_only_needs_the_capability_trait() {
    fn lca_of<'g, G>(graph: &'g G, a: &G::Node, b: &G::Node) -> Option<&'g G::Node>
    where
        G: DirectedValueGraph,
        G::Node: std::hash::Hash + Eq,
    {
        NaiveLcaFinder::new(graph).find_lca(a, b).ok().flatten()
    }

    let ontology = beers();
    assert_eq!(lca_of(&ontology, &"GooseIsland", &"TitanIPA"), Some(&"WestCoastIPA"));
}
