//! Web frameworks known to the controller extractor, how to detect them, and
//! their route pattern tables.

use std::fmt;
use std::sync::LazyLock;

use crate::extraction::patterns::{compile_table, FieldMap, PatternSpec, RoutePattern};

/// Routing convention of a controller file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Flask,
    FastApi,
    Express,
    Spring,
    Django,
    Gin,
    Rails,
    Unknown,
}

/// Content signatures, checked in order. `true` means case-insensitive.
const SIGNATURES: &[(Framework, &str, bool)] = &[
    (Framework::Flask, "from flask import", false),
    (Framework::Flask, "import flask", false),
    (Framework::FastApi, "from fastapi import", false),
    (Framework::FastApi, "import fastapi", false),
    (Framework::Express, "express()", false),
    (Framework::Express, "require('express')", false),
    (Framework::Express, "require(\"express\")", false),
    (Framework::Express, "from 'express'", false),
    (Framework::Express, "from \"express\"", false),
    (Framework::Spring, "@springboot", true),
    (Framework::Spring, "import org.springframework", false),
    (Framework::Django, "django", true),
    (Framework::Gin, "github.com/gin-gonic/gin", false),
    (Framework::Gin, "gin.Default()", false),
    (Framework::Gin, "gin.New()", false),
    (Framework::Rails, "Rails.application.routes", false),
    (Framework::Rails, "ActionController", false),
];

impl Framework {
    /// Detect from content signatures, falling back to the file extension.
    pub fn detect(content: &str, extension: &str) -> Framework {
        let lowered = content.to_lowercase();
        SIGNATURES
            .iter()
            .find(|(_, needle, ignore_case)| {
                if *ignore_case {
                    lowered.contains(*needle)
                } else {
                    content.contains(*needle)
                }
            })
            .map(|(framework, _, _)| *framework)
            .unwrap_or_else(|| Framework::from_extension(extension))
    }

    /// Most likely framework for a file extension.
    pub fn from_extension(extension: &str) -> Framework {
        match extension {
            "js" | "ts" => Framework::Express,
            "py" => Framework::Flask,
            "java" | "kt" => Framework::Spring,
            "go" => Framework::Gin,
            "rb" => Framework::Rails,
            _ => Framework::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Framework::Flask => "flask",
            Framework::FastApi => "fastapi",
            Framework::Express => "express",
            Framework::Spring => "spring",
            Framework::Django => "django",
            Framework::Gin => "gin",
            Framework::Rails => "rails",
            Framework::Unknown => "unknown",
        }
    }

    /// Compiled route patterns. Empty for [`Framework::Unknown`].
    pub fn patterns(&self) -> &'static [RoutePattern] {
        match self {
            Framework::Flask => FLASK.as_slice(),
            Framework::FastApi => FASTAPI.as_slice(),
            Framework::Express => EXPRESS.as_slice(),
            Framework::Spring => SPRING.as_slice(),
            Framework::Django => DJANGO.as_slice(),
            Framework::Gin => GIN.as_slice(),
            Framework::Rails => RAILS.as_slice(),
            Framework::Unknown => &[],
        }
    }

    #[cfg(test)]
    fn specs(&self) -> &'static [PatternSpec] {
        match self {
            Framework::Flask => FLASK_SPECS,
            Framework::FastApi => FASTAPI_SPECS,
            Framework::Express => EXPRESS_SPECS,
            Framework::Spring => SPRING_SPECS,
            Framework::Django => DJANGO_SPECS,
            Framework::Gin => GIN_SPECS,
            Framework::Rails => RAILS_SPECS,
            Framework::Unknown => &[],
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const JS: &[&str] = &["js", "ts"];
const PY: &[&str] = &["py"];
const JVM: &[&str] = &["java", "kt"];
const GO: &[&str] = &["go"];
const RB: &[&str] = &["rb"];

// router.get('/users', ...), app.post("/users", ...). A handler argument must
// follow the path: app.get('env') is a settings lookup.
const EXPRESS_SPECS: &[PatternSpec] = &[
    PatternSpec {
        regex: r#"router\.(get|post|put|delete|patch)\(\s*['"`]([^'"`]+)['"`]\s*,"#,
        extensions: JS,
        fields: FieldMap::VERB_THEN_PATH,
    },
    PatternSpec {
        regex: r#"app\.(get|post|put|delete|patch)\(\s*['"`]([^'"`]+)['"`]\s*,"#,
        extensions: JS,
        fields: FieldMap::VERB_THEN_PATH,
    },
];

// @bp.route('/x', methods=['GET']), @app.route('/x'), @app.get('/x')
const FLASK_SPECS: &[PatternSpec] = &[
    PatternSpec {
        regex: r#"@\w+\.route\(\s*['"]([^'"]+)['"].*methods\s*=\s*[\[(]([^\])]+)[\])]"#,
        extensions: PY,
        fields: FieldMap::PATH_THEN_METHOD_LIST,
    },
    PatternSpec {
        regex: r#"@\w+\.route\(\s*['"]([^'"]+)['"]\s*\)"#,
        extensions: PY,
        fields: FieldMap::PATH_ONLY,
    },
    PatternSpec {
        regex: r#"@\w+\.(get|post|put|delete|patch)\(\s*['"]([^'"]+)['"]"#,
        extensions: PY,
        fields: FieldMap::VERB_THEN_PATH,
    },
];

// @app.get("/x"), @router.post("/x")
const FASTAPI_SPECS: &[PatternSpec] = &[
    PatternSpec {
        regex: r#"@app\.(get|post|put|delete|patch)\(\s*['"]([^'"]+)['"]"#,
        extensions: PY,
        fields: FieldMap::VERB_THEN_PATH,
    },
    PatternSpec {
        regex: r#"@\w*router\.(get|post|put|delete|patch)\(\s*['"]([^'"]+)['"]"#,
        extensions: PY,
        fields: FieldMap::VERB_THEN_PATH,
    },
];

// @GetMapping("/x"), @RequestMapping(path = "/x", method = RequestMethod.GET)
const SPRING_SPECS: &[PatternSpec] = &[
    PatternSpec {
        regex: r#"@(Get|Post|Put|Delete|Patch)Mapping\(\s*(?:(?:value|path)\s*=\s*)?[\[{]?\s*['"]([^'"]+)['"]"#,
        extensions: JVM,
        fields: FieldMap::VERB_THEN_PATH,
    },
    PatternSpec {
        regex: r#"@RequestMapping\(.*(?:path|value)\s*=\s*[\[{]?\s*['"]([^'"]+)['"].*method\s*=\s*[\[{]?\s*RequestMethod\.(\w+)"#,
        extensions: JVM,
        fields: FieldMap::PATH_THEN_VERB,
    },
];

// path('users/', ...), re_path(r'^users/$', ...), url(r'^users/$', ...).
// Case-sensitive: pathlib's Path('/srv') is not a route.
const DJANGO_SPECS: &[PatternSpec] = &[
    PatternSpec {
        regex: r#"(?-i)\bpath\(\s*['"]([^'"]+)['"]"#,
        extensions: PY,
        fields: FieldMap::PATH_ONLY,
    },
    PatternSpec {
        regex: r#"(?-i)\b(?:re_path|url)\(\s*r?['"]\^?([^'"]+)['"]"#,
        extensions: PY,
        fields: FieldMap::PATH_ONLY,
    },
];

// r.GET("/x", h), api.Handle("POST", "/x", h). Case-sensitive: c.Get("key")
// is a context lookup, not a route.
const GIN_SPECS: &[PatternSpec] = &[
    PatternSpec {
        regex: r#"(?-i)\.(GET|POST|PUT|DELETE|PATCH|HEAD|OPTIONS)\(\s*"([^"]+)""#,
        extensions: GO,
        fields: FieldMap::VERB_THEN_PATH,
    },
    PatternSpec {
        regex: r#"(?-i)\.Handle\(\s*"([A-Z]+)"\s*,\s*"([^"]+)""#,
        extensions: GO,
        fields: FieldMap::VERB_THEN_PATH,
    },
];

// get '/users', to: 'users#index'
const RAILS_SPECS: &[PatternSpec] = &[PatternSpec {
    regex: r#"^[ \t]*(get|post|put|delete|patch)[ \t]*\(?[ \t]*['"]([^'"]+)['"]"#,
    extensions: RB,
    fields: FieldMap::VERB_THEN_PATH,
}];

static EXPRESS: LazyLock<Vec<RoutePattern>> = LazyLock::new(|| compile_table(EXPRESS_SPECS));
static FLASK: LazyLock<Vec<RoutePattern>> = LazyLock::new(|| compile_table(FLASK_SPECS));
static FASTAPI: LazyLock<Vec<RoutePattern>> = LazyLock::new(|| compile_table(FASTAPI_SPECS));
static SPRING: LazyLock<Vec<RoutePattern>> = LazyLock::new(|| compile_table(SPRING_SPECS));
static DJANGO: LazyLock<Vec<RoutePattern>> = LazyLock::new(|| compile_table(DJANGO_SPECS));
static GIN: LazyLock<Vec<RoutePattern>> = LazyLock::new(|| compile_table(GIN_SPECS));
static RAILS: LazyLock<Vec<RoutePattern>> = LazyLock::new(|| compile_table(RAILS_SPECS));

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Framework] = &[
        Framework::Flask,
        Framework::FastApi,
        Framework::Express,
        Framework::Spring,
        Framework::Django,
        Framework::Gin,
        Framework::Rails,
    ];

    #[test]
    fn test_every_table_compiles() {
        for framework in ALL {
            assert_eq!(
                framework.patterns().len(),
                framework.specs().len(),
                "{framework} has an invalid pattern"
            );
            assert!(!framework.patterns().is_empty());
        }
        assert!(Framework::Unknown.patterns().is_empty());
    }

    #[test]
    fn test_detect_from_content() {
        assert_eq!(Framework::detect("from flask import Flask", "py"), Framework::Flask);
        assert_eq!(Framework::detect("from fastapi import APIRouter", "py"), Framework::FastApi);
        assert_eq!(Framework::detect("const express = require('express');", "js"), Framework::Express);
        assert_eq!(Framework::detect("import express from 'express';", "ts"), Framework::Express);
        assert_eq!(
            Framework::detect("import org.springframework.web.bind.annotation.*;", "java"),
            Framework::Spring
        );
        assert_eq!(Framework::detect("@SpringBootApplication", "kt"), Framework::Spring);
        assert_eq!(Framework::detect("from Django.urls import path", "py"), Framework::Django);
        assert_eq!(Framework::detect("import \"github.com/gin-gonic/gin\"", "go"), Framework::Gin);
        assert_eq!(Framework::detect("Rails.application.routes.draw do", "rb"), Framework::Rails);
    }

    #[test]
    fn test_signature_order_breaks_ties() {
        let content = "from flask import Flask\nfrom fastapi import FastAPI";
        assert_eq!(Framework::detect(content, "py"), Framework::Flask);
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(Framework::detect("", "js"), Framework::Express);
        assert_eq!(Framework::detect("", "ts"), Framework::Express);
        assert_eq!(Framework::detect("", "py"), Framework::Flask);
        assert_eq!(Framework::detect("", "java"), Framework::Spring);
        assert_eq!(Framework::detect("", "kt"), Framework::Spring);
        assert_eq!(Framework::detect("", "go"), Framework::Gin);
        assert_eq!(Framework::detect("", "rb"), Framework::Rails);
        assert_eq!(Framework::detect("", "php"), Framework::Unknown);
    }
}
