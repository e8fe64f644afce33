use crate::{
    ast::{CssRule, MediaRule, StyleRule, Stylesheet},
    Options,
};

pub(crate) struct Serializer<'a> {
    indentation: usize,
    options: &'a Options<'a>,
    buffer: String,
}

impl<'a> Serializer<'a> {
    pub fn new(options: &'a Options<'a>) -> Self {
        Self {
            indentation: 0,
            options,
            buffer: String::new(),
        }
    }

    pub fn visit_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let mut first = true;
        for rule in &stylesheet.rules {
            // expanded output separates top-level rules with a blank line
            if !first && !self.options.is_compressed() {
                self.buffer.push('\n');
            }
            self.visit_rule(rule);
            first = false;
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    fn visit_rule(&mut self, rule: &CssRule) {
        match rule {
            CssRule::Style(style) => self.visit_style_rule(style),
            CssRule::Media(media) => self.visit_media_rule(media),
            // `Other` rules are dropped during extraction and carry no
            // serializable content
            CssRule::Other(..) => {}
        }
    }

    fn visit_media_rule(&mut self, media: &MediaRule) {
        self.write_indentation();
        self.buffer.push_str("@media ");
        self.buffer.push_str(&media.condition);
        if self.options.is_compressed() {
            self.buffer.push('{');
        } else {
            self.buffer.push_str(" {\n");
        }

        self.indentation += 2;
        for rule in &media.rules {
            self.visit_rule(rule);
        }
        self.indentation -= 2;

        self.write_indentation();
        self.buffer.push('}');
        if !self.options.is_compressed() {
            self.buffer.push('\n');
        }
    }

    fn visit_style_rule(&mut self, rule: &StyleRule) {
        if self.options.is_compressed() {
            let mut first = true;
            for part in rule.selector.split(',') {
                if !first {
                    self.buffer.push(',');
                }
                self.buffer.push_str(part.trim());
                first = false;
            }
            self.buffer.push('{');
            let mut first = true;
            for declaration in &rule.declarations {
                if !first {
                    self.buffer.push(';');
                }
                self.buffer.push_str(&declaration.name);
                self.buffer.push(':');
                self.buffer.push_str(&declaration.value);
                if declaration.important {
                    self.buffer.push_str("!important");
                }
                first = false;
            }
            self.buffer.push('}');
        } else {
            self.write_indentation();
            self.buffer.push_str(&rule.selector);
            self.buffer.push_str(" {\n");
            self.indentation += 2;
            for declaration in &rule.declarations {
                self.write_indentation();
                self.buffer.push_str(&declaration.name);
                self.buffer.push_str(": ");
                self.buffer.push_str(&declaration.value);
                if declaration.important {
                    self.buffer.push_str(" !important");
                }
                self.buffer.push_str(";\n");
            }
            self.indentation -= 2;
            self.write_indentation();
            self.buffer.push_str("}\n");
        }
    }

    fn write_indentation(&mut self) {
        if self.options.is_compressed() {
            return;
        }
        for _ in 0..self.indentation {
            self.buffer.push(' ');
        }
    }
}
