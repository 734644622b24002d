//! Term identity walkthrough
//!
//! Shows the identity rules end to end:
//! - **IRIs:** simple string comparison, no normalization
//! - **Blank nodes:** the same label in two graphs names two resources
//! - **Literals:** language tags compare case-insensitively
//!
//! Run with `RUST_LOG=debug` to see scope creation and rejected literals.

use rdf_terms::rdf::{NamespaceManager, vocab::xsd};
use rdf_terms::{FactoryConfig, Iri, Literal, TermFactory, TermHash, TermSet};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let ns = NamespaceManager::new();
    let config = FactoryConfig::from_json(r#"{"scope": {"label_prefix": "person"}}"#)?;
    let graph_a = TermFactory::with_config(config.clone());
    let graph_b = TermFactory::with_config(config);

    println!("== IRIs");
    let knows = ns.expand("foaf:knows")?;
    let encoded = Iri::new("http://example.org/%41");
    let plain = Iri::new("http://example.org/A");
    println!("{} == {}? {}", encoded, plain, encoded == plain);
    println!("{} compacts to {:?}", knows, ns.compact(&knows));

    println!("\n== Blank nodes");
    let alice_a = graph_a.create_blank_node();
    let alice_b = graph_b.create_blank_node();
    println!(
        "{} in graph A vs {} in graph B: equal? {}",
        alice_a,
        alice_b,
        alice_a == alice_b
    );
    let bob = graph_a.create_blank_node();
    let triple = graph_a.create_triple(alice_a.clone(), knows, bob);
    println!("{}", triple);

    println!("\n== Literals");
    let en = Literal::new("hello", Iri::rdf_lang_string(), Some("en"))?;
    let upper = Literal::new("hello", Iri::rdf_lang_string(), Some("EN"))?;
    println!(
        "{} == {}? {} (hash {:016x} / {:016x})",
        en,
        upper,
        en == upper,
        en.hash_code(),
        upper.hash_code()
    );
    match Literal::new("5", Iri::new(xsd::INTEGER), Some("en")) {
        Ok(lit) => println!("unexpectedly built {}", lit),
        Err(e) => println!("rejected: {}", e),
    }

    println!("\n== Term set");
    let mut set = TermSet::default();
    set.insert(en.into());
    set.insert(upper.into());
    set.insert(alice_a.into());
    set.insert(alice_b.into());
    println!("4 inserts, {} distinct terms", set.len());

    Ok(())
}
