//! Source languages handled by the annotation extractor and their
//! decorator/annotation pattern tables.

use std::fmt;
use std::sync::LazyLock;

use crate::extraction::patterns::{compile_table, FieldMap, PatternSpec, RoutePattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Java,
    TypeScript,
}

impl Language {
    pub fn from_extension(extension: &str) -> Option<Language> {
        match extension {
            "py" => Some(Language::Python),
            "java" | "kt" => Some(Language::Java),
            "ts" | "js" => Some(Language::TypeScript),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::TypeScript => "typescript",
        }
    }

    pub fn patterns(&self) -> &'static [RoutePattern] {
        match self {
            Language::Python => PYTHON.as_slice(),
            Language::Java => JAVA.as_slice(),
            Language::TypeScript => TYPESCRIPT.as_slice(),
        }
    }

    #[cfg(test)]
    fn specs(&self) -> &'static [PatternSpec] {
        match self {
            Language::Python => PYTHON_SPECS,
            Language::Java => JAVA_SPECS,
            Language::TypeScript => TYPESCRIPT_SPECS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const PY: &[&str] = &["py"];
const JVM: &[&str] = &["java", "kt"];
const JS: &[&str] = &["ts", "js"];

// @api.get("/orders"), @bp.route("/orders")
const PYTHON_SPECS: &[PatternSpec] = &[PatternSpec {
    regex: r#"@(\w+)\.(route|get|post|put|delete|patch)\(\s*['"]([^'"]+)['"]"#,
    extensions: PY,
    fields: FieldMap::OWNER_VERB_PATH,
}];

// @GetMapping("/x"), @RequestMapping("/x", method = RequestMethod.GET), @Path("/x")
const JAVA_SPECS: &[PatternSpec] = &[
    PatternSpec {
        regex: r#"@(Get|Post|Put|Delete|Patch)Mapping\(\s*(?:(?:value|path)\s*=\s*)?[\[{]?\s*['"]([^'"]+)['"]"#,
        extensions: JVM,
        fields: FieldMap::VERB_THEN_PATH,
    },
    PatternSpec {
        regex: r#"@RequestMapping\(\s*(?:(?:value|path)\s*=\s*)?[\[{]?\s*['"]([^'"]+)['"].*method\s*=\s*[\[{]?\s*RequestMethod\.(\w+)"#,
        extensions: JVM,
        fields: FieldMap::PATH_THEN_VERB,
    },
    PatternSpec {
        regex: r#"@Path\(\s*['"]([^'"]+)['"]"#,
        extensions: JVM,
        fields: FieldMap::PATH_ONLY,
    },
];

// @Get("/x") in NestJS-style controllers, @Route("/x") in tsoa.
const TYPESCRIPT_SPECS: &[PatternSpec] = &[
    PatternSpec {
        regex: r#"@(Get|Post|Put|Delete|Patch)\(\s*['"]([^'"]+)['"]"#,
        extensions: JS,
        fields: FieldMap::VERB_THEN_PATH,
    },
    PatternSpec {
        regex: r#"@Route\(\s*['"]([^'"]+)['"]"#,
        extensions: JS,
        fields: FieldMap::PATH_ONLY,
    },
];

static PYTHON: LazyLock<Vec<RoutePattern>> = LazyLock::new(|| compile_table(PYTHON_SPECS));
static JAVA: LazyLock<Vec<RoutePattern>> = LazyLock::new(|| compile_table(JAVA_SPECS));
static TYPESCRIPT: LazyLock<Vec<RoutePattern>> = LazyLock::new(|| compile_table(TYPESCRIPT_SPECS));
