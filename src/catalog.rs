//! Static documentation catalog: categories → items → content blobs.
//!
//! The whole set is built at startup and never mutated. The content table
//! covers only a subset of the item table; looking up any other item id is a
//! NotFound, matching the product's current state where most documents have
//! no inline content yet.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::types::{DocCategory, DocContent, DocItem, TocEntry};

/// Immutable documentation catalog.
#[derive(Debug)]
pub struct DocCatalog {
    categories: Vec<DocCategory>,
    items: Vec<DocItem>,
    content: HashMap<String, DocContent>,
}

fn category(id: &str, name: &str, description: &str, icon: &str) -> DocCategory {
    DocCategory {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
    }
}

fn item(id: &str, category_id: &str, title: &str, path: &str, summary: &str) -> DocItem {
    DocItem {
        id: id.into(),
        category_id: category_id.into(),
        title: title.into(),
        path: path.into(),
        summary: Some(summary.into()),
    }
}

impl Default for DocCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DocCatalog {
    /// Build the catalog with the full static data set.
    pub fn new() -> Self {
        let categories = vec![
            category(
                "architecture",
                "Architecture",
                "System architecture and design documentation",
                "cube",
            ),
            category(
                "user-guides",
                "User Guides",
                "Guides for using the Studi platform",
                "book-open",
            ),
            category(
                "development",
                "Development",
                "Documentation for developers",
                "code",
            ),
            category(
                "api",
                "API Documentation",
                "API reference and usage examples",
                "server",
            ),
            category(
                "deployment",
                "Deployment & Operations",
                "Deployment guides and operational procedures",
                "cloud",
            ),
            category(
                "security",
                "Security & Compliance",
                "Security documentation and compliance information",
                "shield-check",
            ),
        ];

        let items = vec![
            item(
                "architecture-overview",
                "architecture",
                "Architecture Overview",
                "/docs/ARCHITECTURE.md",
                "Overview of the Studi system architecture",
            ),
            item(
                "agent-architecture",
                "architecture",
                "Agent Architecture",
                "/docs/AGENT_ARCHITECTURE.md",
                "Details of the multi-agent AI system",
            ),
            item(
                "memory-system",
                "architecture",
                "Memory System",
                "/docs/MEMORY_SYSTEM.md",
                "Documentation of the multi-layered memory system",
            ),
            item(
                "web-architecture",
                "architecture",
                "Web Architecture",
                "/docs/WEB_ARCHITECTURE.md",
                "Web application architecture and components",
            ),
            item(
                "getting-started",
                "user-guides",
                "Getting Started",
                "/docs/user-guides/GETTING_STARTED.md",
                "Guide for new users to get started with Studi",
            ),
            item(
                "canvas-integration",
                "user-guides",
                "Canvas LMS Integration",
                "/docs/user-guides/CANVAS_INTEGRATION.md",
                "How to connect Studi with Canvas LMS",
            ),
            item(
                "study-guide-creation",
                "user-guides",
                "Creating Study Guides",
                "/docs/user-guides/STUDY_GUIDES.md",
                "How to create and use personalized study guides",
            ),
            item(
                "api-overview",
                "api",
                "API Overview",
                "/docs/api/OVERVIEW.md",
                "Overview of the Studi API",
            ),
            item(
                "authentication",
                "api",
                "Authentication",
                "/docs/api/AUTHENTICATION.md",
                "API authentication methods and examples",
            ),
            item(
                "deployment-guide",
                "deployment",
                "Deployment Guide",
                "/docs/DEPLOYMENT.md",
                "Guide for deploying Studi in production",
            ),
        ];

        let mut content = HashMap::new();
        content.insert(
            "architecture-overview".to_string(),
            DocContent {
                id: "architecture-overview".into(),
                title: "Architecture Overview".into(),
                content: ARCHITECTURE_OVERVIEW_BODY.into(),
                toc: vec![
                    TocEntry {
                        level: 1,
                        title: "Architecture Overview".into(),
                        id: "architecture-overview".into(),
                    },
                    TocEntry {
                        level: 2,
                        title: "Core Components".into(),
                        id: "core-components".into(),
                    },
                    TocEntry {
                        level: 2,
                        title: "System Diagram".into(),
                        id: "system-diagram".into(),
                    },
                    TocEntry {
                        level: 2,
                        title: "Data Flow".into(),
                        id: "data-flow".into(),
                    },
                ],
                last_updated: NaiveDate::from_ymd_opt(2023, 6, 15).expect("valid date literal"),
            },
        );

        Self {
            categories,
            items,
            content,
        }
    }

    /// All categories, fixed order.
    pub fn categories(&self) -> &[DocCategory] {
        &self.categories
    }

    /// All items, or only those in `category_id`. An unknown category id
    /// yields an empty list, not an error.
    pub fn items(&self, category_id: Option<&str>) -> Vec<DocItem> {
        match category_id {
            Some(category_id) => self
                .items
                .iter()
                .filter(|item| item.category_id == category_id)
                .cloned()
                .collect(),
            None => self.items.clone(),
        }
    }

    /// Exact-key content lookup.
    pub fn content(&self, doc_id: &str) -> Option<&DocContent> {
        self.content.get(doc_id)
    }

    /// Case-insensitive substring search over item titles and summaries, in
    /// catalog order. An empty query matches every item.
    pub fn search(&self, query: &str) -> Vec<DocItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item
                        .summary
                        .as_ref()
                        .is_some_and(|summary| summary.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

const ARCHITECTURE_OVERVIEW_BODY: &str = r"
# Architecture Overview

Studi is built on a modern, scalable architecture designed to provide a seamless learning experience.

## Core Components

- **Multi-Agent AI System**: Specialized AI agents for planning, knowledge creation, and task execution
- **Memory System**: Multi-layered memory for context retention and knowledge creation
- **Web Application**: React frontend with FastAPI backend
- **Canvas LMS Integration**: Seamless connection to Canvas courses and assignments

## System Diagram

```
User <-> Web App <-> API Gateway <-> Agent System <-> Memory System
                                  <-> Canvas API
```

## Data Flow

1. User interacts with the web application
2. Requests are processed by the API Gateway
3. The Agent System handles complex tasks using specialized agents
4. The Memory System stores and retrieves relevant information
5. Canvas API integration provides access to course materials and assignments
";
