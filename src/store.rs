//! In-memory triple store loaded from Turtle.
//!
//! The store keeps triples in parse order and indexes them by
//! (subject, predicate) so label and type lookups don't rescan the graph.
//! Duplicate triples collapse on insert, as in any RDF graph.

use crate::error::{GraphError, Result};
use crate::models::{Term, Triple};
use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::Term as RdfTerm;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// What graph building needs from a triple store: ordered iteration and
/// object lookup for a (subject, predicate) pair.
pub trait TripleSource {
    /// All triples, in store order.
    fn triples(&self) -> impl Iterator<Item = &Triple>;

    /// Objects of every triple with the given subject and predicate, in store
    /// order.
    fn objects(&self, subject: &str, predicate: &str) -> Vec<&Term>;
}

#[derive(Debug, Default)]
pub struct TripleStore {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    by_subject_predicate: HashMap<(String, String), Vec<usize>>,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        let position = self.triples.len();
        self.by_subject_predicate
            .entry((triple.subject.clone(), triple.predicate.clone()))
            .or_default()
            .push(position);
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Loads a Turtle file. A missing path is `InvalidInput`; a file over
    /// `max_triples` (when set) is rejected the same way.
    pub fn from_path(path: &Path, max_triples: Option<usize>) -> Result<Self> {
        if !path.is_file() {
            return Err(GraphError::InvalidInput(format!(
                "triple source {} does not exist or is not a file",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::parse_turtle(
            BufReader::new(file),
            &path.display().to_string(),
            max_triples,
        )?;
        info!(path = %path.display(), triples = store.len(), "loaded triple store");
        Ok(store)
    }

    /// Parses Turtle from any reader. `origin` names the source in errors.
    ///
    /// Blank nodes and quoted triples are skipped: only URIs and literals can
    /// take part in the graph.
    pub fn parse_turtle<R: Read>(reader: R, origin: &str, max_triples: Option<usize>) -> Result<Self> {
        let mut store = Self::new();
        let mut skipped = 0usize;

        for quad in RdfParser::from_format(RdfFormat::Turtle).for_reader(reader) {
            let quad = quad.map_err(|e| GraphError::Parse {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

            let subject = match RdfTerm::from(quad.subject) {
                RdfTerm::NamedNode(node) => node.into_string(),
                _ => {
                    skipped += 1;
                    continue;
                }
            };
            let object = match quad.object {
                RdfTerm::NamedNode(node) => Term::Resource(node.into_string()),
                RdfTerm::Literal(literal) => Term::Literal(literal.value().to_string()),
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            store.insert(Triple {
                subject,
                predicate: quad.predicate.into_string(),
                object,
            });

            if let Some(max) = max_triples {
                if store.len() > max {
                    return Err(GraphError::InvalidInput(format!(
                        "{} holds more than {} triples",
                        origin, max
                    )));
                }
            }
        }

        if skipped > 0 {
            debug!(origin, skipped, "skipped triples with blank nodes");
        }
        Ok(store)
    }
}

impl TripleSource for TripleStore {
    fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    fn objects(&self, subject: &str, predicate: &str) -> Vec<&Term> {
        self.by_subject_predicate
            .get(&(subject.to_string(), predicate.to_string()))
            .map(|positions| positions.iter().map(|&i| &self.triples[i].object).collect())
            .unwrap_or_default()
    }
}

impl FromIterator<Triple> for TripleStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut store = Self::new();
        for triple in iter {
            store.insert(triple);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RDFS_LABEL, RDF_TYPE};
    use std::io::Write;

    const TTL: &str = r#"
        @prefix ex: <http://example.org/resource/> .
        @prefix ont: <http://example.org/ontology#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

        ex:J1 a ont:Jaguar ;
            rdfs:label "Jag One" ;
            ont:livesIn ex:Brazil .
        ex:Brazil a ont:Country .
    "#;

    #[test]
    fn test_parse_turtle_keeps_order() {
        let store = TripleStore::parse_turtle(TTL.as_bytes(), "inline", None).unwrap();
        assert_eq!(store.len(), 4);

        let first = store.triples().next().unwrap();
        assert_eq!(first.subject, "http://example.org/resource/J1");
        assert_eq!(first.predicate, RDF_TYPE);
        assert_eq!(first.object, Term::resource("http://example.org/ontology#Jaguar"));
    }

    #[test]
    fn test_objects_lookup() {
        let store = TripleStore::parse_turtle(TTL.as_bytes(), "inline", None).unwrap();
        let labels = store.objects("http://example.org/resource/J1", RDFS_LABEL);
        assert_eq!(labels, vec![&Term::literal("Jag One")]);
        assert!(store
            .objects("http://example.org/resource/Brazil", RDFS_LABEL)
            .is_empty());
    }

    #[test]
    fn test_duplicate_triples_collapse() {
        let t = Triple::new("http://x/a", "http://x/p", Term::resource("http://x/b"));
        let mut store = TripleStore::new();
        assert!(store.insert(t.clone()));
        assert!(!store.insert(t));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_blank_nodes_skipped() {
        let ttl = r#"
            @prefix ex: <http://example.org/resource/> .
            ex:a ex:knows [ ex:name "anon" ] .
            ex:a ex:knows ex:b .
        "#;
        let store = TripleStore::parse_turtle(ttl.as_bytes(), "inline", None).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.triples().next().unwrap().object, Term::resource("http://example.org/resource/b"));
    }

    #[test]
    fn test_malformed_turtle_is_parse_error() {
        let result = TripleStore::parse_turtle("ex:a ex:b".as_bytes(), "broken.ttl", None);
        assert!(matches!(result, Err(GraphError::Parse { .. })));
    }

    #[test]
    fn test_max_triples() {
        let result = TripleStore::parse_turtle(TTL.as_bytes(), "inline", Some(2));
        assert!(matches!(result, Err(GraphError::InvalidInput(_))));
        assert!(TripleStore::parse_turtle(TTL.as_bytes(), "inline", Some(4)).is_ok());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TTL.as_bytes()).unwrap();
        let store = TripleStore::from_path(file.path(), None).unwrap();
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_missing_path_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = TripleStore::from_path(&dir.path().join("nope.ttl"), None);
        assert!(matches!(result, Err(GraphError::InvalidInput(_))));
    }
}
