// Copyright 2023 Xayn AG
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Texts and pages the summarizer and fetcher tests work on.

/// A short news article as plain text.
pub const ARTICLE: &str = "Artificial intelligence is changing how hospitals diagnose disease. \
Doctors use machine learning models to read medical images faster than before. \
The models learn from millions of scans collected by hospitals around the world.

Critics warn that biased training data can lead to unequal care for patients. \
Hospitals therefore audit their models and compare predictions with the judgment of doctors. \
Patients often want to know when a machine was involved in their diagnosis.

Regulators are drafting rules that require hospitals to explain how models reach decisions. \
Despite the concerns, most doctors expect artificial intelligence to support rather than replace them.
";

/// The sentences of [`ARTICLE`] in document order.
pub const ARTICLE_SENTENCES: [&str; 8] = [
    "Artificial intelligence is changing how hospitals diagnose disease.",
    "Doctors use machine learning models to read medical images faster than before.",
    "The models learn from millions of scans collected by hospitals around the world.",
    "Critics warn that biased training data can lead to unequal care for patients.",
    "Hospitals therefore audit their models and compare predictions with the judgment of doctors.",
    "Patients often want to know when a machine was involved in their diagnosis.",
    "Regulators are drafting rules that require hospitals to explain how models reach decisions.",
    "Despite the concerns, most doctors expect artificial intelligence to support rather than replace them.",
];

/// A news page with the article split over two `<article>` elements.
pub const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Artificial intelligence in health care</title>
  </head>
  <body>
    <nav>Home World Health</nav>
    <article>
      <h1>Artificial intelligence in health care</h1>
      <p>Artificial intelligence is changing how hospitals diagnose disease.</p>
      <p>Doctors use machine learning models to read medical images faster than before.</p>
    </article>
    <aside>Subscribe to our newsletter.</aside>
    <article>
      <p>Critics warn that biased training data can lead to unequal care for patients.</p>
    </article>
  </body>
</html>
"#;

/// The whitespace normalized text of the `<article>` elements of [`ARTICLE_HTML`].
pub const ARTICLE_HTML_TEXT: &str = "Artificial intelligence in health care \
Artificial intelligence is changing how hospitals diagnose disease. \
Doctors use machine learning models to read medical images faster than before. \
Critics warn that biased training data can lead to unequal care for patients.";

/// A page without any `<article>` element.
pub const HTML_WITHOUT_ARTICLE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <main><p>Nothing to see here.</p></main>
  </body>
</html>
"#;
