//! Built-in TypeScript starter.
//!
//! [`typescript_starter`] is the single source of the files written by every
//! run. The list and its order are fixed; only the manifest `name` varies.
//!
//! | Path                    | Tool                          |
//! |-------------------------|-------------------------------|
//! | `index.ts`              | entry point                   |
//! | `package.json`          | manifest (start/lint/format)  |
//! | `.yarnrc.yml`           | yarn settings                 |
//! | `tsconfig.json`         | TypeScript compiler           |
//! | `.eslintrc.json`        | ESLint                        |
//! | `.prettierrc`           | Prettier                      |
//! | `.vscode/settings.json` | VS Code workspace settings    |

use serde_json::json;

use tiny_ts_init_core::domain::TemplateSet;

/// Yarn release pinned by both the manifest and `.yarnrc.yml`.
pub const YARN_VERSION: &str = "4.5.1";

const INDEX_TS: &str = "\
// Your TypeScript code goes here
console.log('Hello from TypeScript!');

console.log('Created by tiny-ts-init');
";

/// Build the starter template set for a package called `project_name`.
pub fn typescript_starter(project_name: &str) -> TemplateSet {
    TemplateSet::new()
        .with_text("index.ts", INDEX_TS)
        .with_json("package.json", package_json(project_name))
        .with_text(".yarnrc.yml", yarnrc())
        .with_json("tsconfig.json", tsconfig())
        .with_json(".eslintrc.json", eslintrc())
        .with_json(".prettierrc", prettierrc())
        .with_json(".vscode/settings.json", vscode_settings())
}

fn package_json(project_name: &str) -> serde_json::Value {
    json!({
        "name": project_name,
        "version": "1.0.0",
        "type": "module",
        "main": "index.ts",
        "scripts": {
            "start": "node --loader ts-node/esm index.ts",
            "lint": "eslint . --ext .ts",
            "format": "prettier --write ."
        },
        "devDependencies": {
            "@types/node": "^20.11.0",
            "@typescript-eslint/eslint-plugin": "^6.18.1",
            "@typescript-eslint/parser": "^6.18.1",
            "eslint": "^8.56.0",
            "eslint-config-prettier": "^9.1.0",
            "eslint-plugin-prettier": "^5.1.3",
            "prettier": "^3.1.1",
            "ts-node": "^10.9.2",
            "typescript": "^5.3.3"
        },
        "engines": {
            "node": ">=18.0.0"
        },
        "packageManager": format!("yarn@{YARN_VERSION}")
    })
}

fn yarnrc() -> String {
    format!("yarnPath: .yarn/releases/yarn-{YARN_VERSION}.cjs\nnodeLinker: node-modules\n")
}

fn tsconfig() -> serde_json::Value {
    json!({
        "$schema": "https://json.schemastore.org/tsconfig",
        "compilerOptions": {
            "target": "ESNext",
            "module": "NodeNext",
            "moduleResolution": "NodeNext",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
            "outDir": "./dist",
            "rootDir": ".",
            "isolatedModules": true,
            "verbatimModuleSyntax": true
        },
        "include": ["*.ts"],
        "exclude": ["node_modules", "dist"]
    })
}

fn eslintrc() -> serde_json::Value {
    json!({
        "root": true,
        "env": {
            "node": true,
            "es2024": true
        },
        "parser": "@typescript-eslint/parser",
        "plugins": ["@typescript-eslint", "prettier"],
        "extends": [
            "eslint:recommended",
            "plugin:@typescript-eslint/recommended",
            "plugin:@typescript-eslint/recommended-requiring-type-checking",
            "prettier"
        ],
        "parserOptions": {
            "ecmaVersion": "latest",
            "sourceType": "module",
            "project": "./tsconfig.json"
        },
        "rules": {
            "prettier/prettier": "error",
            "@typescript-eslint/explicit-function-return-type": "error",
            "@typescript-eslint/no-unused-vars": ["error", { "argsIgnorePattern": "^_" }],
            "@typescript-eslint/no-floating-promises": "error"
        }
    })
}

fn prettierrc() -> serde_json::Value {
    json!({
        "semi": true,
        "trailingComma": "all",
        "singleQuote": true,
        "printWidth": 100,
        "tabWidth": 2
    })
}

fn vscode_settings() -> serde_json::Value {
    json!({
        "editor.defaultFormatter": "esbenp.prettier-vscode",
        "editor.formatOnSave": true,
        "editor.codeActionsOnSave": {
            "source.fixAll.eslint": true
        },
        "eslint.validate": ["typescript"],
        "files.eol": "\n"
    })
}
