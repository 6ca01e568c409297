// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-page HTML report of SVG snapshots.

use std::fmt::Write as _;

/// One titled row of snapshots.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) description: String,
    /// `(caption, svg)` pairs shown side by side.
    pub(crate) frames: Vec<(String, String)>,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 24px; }}\n\
         .row {{ display: flex; flex-wrap: wrap; gap: 16px; }}\n\
         figure {{ margin: 0; border: 1px solid #ddd; padding: 8px; }}\n\
         figcaption {{ font-size: 12px; color: #555; }}\n\
         </style>\n</head>\n<body>\n<h1>{title}</h1>\n"
    );
    for section in sections {
        let _ = write!(
            out,
            "<section>\n<h2>{}</h2>\n<p>{}</p>\n<div class=\"row\">\n",
            section.title, section.description
        );
        for (caption, svg) in &section.frames {
            let _ = write!(
                out,
                "<figure>\n{svg}<figcaption>{caption}</figcaption>\n</figure>\n"
            );
        }
        out.push_str("</div>\n</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}
