// Sample resume shown when a session starts.

pub const DEFAULT_MARKDOWN: &str = r#"# Alex Morgan
**Software Engineer**

email@example.com | (555) 123-4567 | github.com/alexmorgan

## Summary
Experienced software engineer with a passion for building scalable web applications. Proficient in React, TypeScript, and Node.js.

## Experience

### Senior Frontend Developer | Tech Corp
*2020 - Present*
- Led the migration of a legacy codebase to React and TypeScript.
- Improved site performance by 40% through code splitting and optimization.
- Mentored junior developers and established coding standards.

### Web Developer | Creative Agency
*2018 - 2020*
- Developed responsive websites for diverse clients using HTML, CSS, and JavaScript.
- Collaborated with designers to implement pixel-perfect UIs.

## Skills
- **Languages:** JavaScript, TypeScript, Python, HTML, CSS
- **Frameworks:** React, Next.js, Tailwind CSS, Node.js
- **Tools:** Git, Docker, AWS

## Education
**B.S. Computer Science**
University of Technology | 2014 - 2018
"#;
