use crate::domain::Language;
use crate::http::client::ExecutionBackend;

/// Built-in samples used when the remote catalog is unreachable. Static
/// configuration data: ids and idiomatic hello-world sources, in display
/// order.
pub const FALLBACK_LANGUAGES: &[(&str, &str)] = &[
    (
        "java",
        r#"public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}"#,
    ),
    ("python", r#"print("Hello, World!")"#),
    ("javascript", r#"console.log("Hello, World!");"#),
    (
        "typescript",
        r#"const greeting: string = "Hello, World!";
console.log(greeting);"#,
    ),
    (
        "c",
        r#"#include <stdio.h>

int main() {
    printf("Hello, World!\n");
    return 0;
}"#,
    ),
    (
        "cpp",
        r#"#include <iostream>

int main() {
    std::cout << "Hello, World!" << std::endl;
    return 0;
}"#,
    ),
    (
        "go",
        r#"package main

import "fmt"

func main() {
    fmt.Println("Hello, World!")
}"#,
    ),
    (
        "rust",
        r#"fn main() {
    println!("Hello, World!");
}"#,
    ),
    ("ruby", r#"puts "Hello, World!""#),
    (
        "php",
        r#"<?php
echo "Hello, World!\n";
?>"#,
    ),
    (
        "kotlin",
        r#"fun main() {
    println("Hello, World!")
}"#,
    ),
    ("swift", r#"print("Hello, World!")"#),
    ("perl", r#"print "Hello, World!\n";"#),
    (
        "bash",
        r#"#!/bin/bash
echo "Hello, World!""#,
    ),
];

/// Ordered set of selectable languages. Insertion order is display order;
/// descriptors are immutable once loaded.
#[derive(Clone, Debug, Default)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

#[derive(Clone, Debug)]
pub enum CatalogSource {
    Remote,
    Fallback { reason: String },
}

/// Outcome of a catalog load: the catalog itself plus where it came from,
/// so the caller can surface the offline advisory.
#[derive(Clone, Debug)]
pub struct CatalogLoad {
    pub catalog: LanguageCatalog,
    pub source: CatalogSource,
}

impl LanguageCatalog {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// Fetches the remote catalog, substituting the built-in table when the
    /// server is unreachable. Never fails: offline mode still allows language
    /// selection and sample editing, only execution will error later.
    #[tracing::instrument(skip(backend))]
    pub async fn load(backend: &dyn ExecutionBackend) -> CatalogLoad {
        match backend.languages().await {
            Ok(languages) => {
                tracing::info!("Catalog loaded from server: {} languages", languages.len());
                CatalogLoad {
                    catalog: Self::new(languages),
                    source: CatalogSource::Remote,
                }
            }
            Err(err) => {
                tracing::warn!("Catalog load failed, using built-in table: {:?}", err);
                CatalogLoad {
                    catalog: Self::fallback(),
                    source: CatalogSource::Fallback {
                        reason: err.to_string(),
                    },
                }
            }
        }
    }

    /// The built-in table: generated display names (capitalized id) and
    /// `.{id}` extensions around the hard-coded samples.
    pub fn fallback() -> Self {
        let languages = FALLBACK_LANGUAGES
            .iter()
            .map(|(id, sample)| Language {
                id: id.to_string(),
                name: capitalize(id),
                extension: format!(".{id}"),
                sample_code: sample.to_string(),
            })
            .collect();
        Self { languages }
    }

    pub fn get(&self, id: &str) -> Option<&Language> {
        self.languages.iter().find(|language| language.id == id)
    }

    /// Default selection: the `python` entry when present, else the first
    /// entry, else nothing (an empty remote list is valid).
    pub fn default_language(&self) -> Option<&Language> {
        self.get("python").or_else(|| self.languages.first())
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
