use cmodule::config::{GuardStyle, ModuleRules};
use cmodule::renderer::{render_header, render_impl, ModuleRenderer};

fn rules(endif_comment: &str) -> ModuleRules {
    ModuleRules {
        copyright: vec!["// Co".to_string()],
        guard_style: GuardStyle {
            suffix: "_H".to_string(),
            prefix: String::new(),
            save_extension: false,
        },
        endif_comment: endif_comment.to_string(),
    }
}

#[test]
fn test_render_header() {
    let header = render_header(&rules("// $(GUARD)"), "./out/foo.h");
    assert_eq!(header, "// Co\n#ifndef foo_H\n#define foo_H\n\n#endif // foo_H");
}

#[test]
fn test_render_header_multiline_copyright() {
    let mut rules = rules("");
    rules.copyright = vec!["/*".to_string(), " * (c) Someone".to_string(), " */".to_string()];

    let header = render_header(&rules, "bar.h");
    assert!(header.starts_with("/*\n * (c) Someone\n */\n#ifndef bar_H\n"));
    assert!(header.ends_with("#endif "));
}

#[test]
fn test_render_header_guard_tokens_match() {
    let header = render_header(&rules("/* $(GUARD) | $(GUARD) */\n"), "a-b.h");
    let lines: Vec<&str> = header.lines().collect();

    let ifndef = lines[1].strip_prefix("#ifndef ").unwrap();
    let define = lines[2].strip_prefix("#define ").unwrap();
    assert_eq!(ifndef, define);
    assert_eq!(lines[4], format!("#endif /* {ifndef} | {ifndef} */"));
    assert!(header.ends_with('\n'));
}

#[test]
fn test_render_impl_uses_basename() {
    let source = render_impl(&rules(""), "deep/nested/dir/foo.h");
    assert_eq!(source, "// Co\n#include \"foo.h\"\n");
}

#[test]
fn test_empty_copyright() {
    let mut rules = rules("");
    rules.copyright.clear();
    assert_eq!(render_impl(&rules, "x.h"), "\n#include \"x.h\"\n");
}

#[test]
fn test_module_renderer() {
    let rules = rules("// $(GUARD)");
    let rendered = ModuleRenderer::new(&rules).render("out/foo.h");

    assert_eq!(rendered.header, render_header(&rules, "out/foo.h"));
    assert_eq!(rendered.source, "// Co\n#include \"foo.h\"\n");
}
