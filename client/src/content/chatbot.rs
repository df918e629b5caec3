use super::BlogPost;

pub(super) const POST: BlogPost = BlogPost {
    slug: "chatbot",
    title: "Building a Chat Assistant with OpenAI Assistant API",
    date: "March 15, 2024",
    summary: "Learn how to create an intelligent chat assistant using OpenAI's Assistant API. \
              We'll cover setup, implementation, and best practices.",
    content: r#"
# Building a Chat Assistant with OpenAI Assistant API

## Introduction
The OpenAI Assistant API provides a powerful way to create custom AI assistants. In this guide, we'll walk through creating a chat assistant from scratch.

## Prerequisites
- OpenAI API key
- Node.js installed
- Basic understanding of React

## Step 1: Setup
First, install the necessary dependencies:
```bash
npm install openai react @types/node
```

## Step 2: Create the Assistant
```typescript
import OpenAI from 'openai';

const openai = new OpenAI({
  apiKey: process.env.OPENAI_API_KEY
});

const assistant = await openai.beta.assistants.create({
  name: "Custom Chat Assistant",
  instructions: "You are a helpful assistant...",
  model: "gpt-4-turbo-preview"
});
```

## Step 3: Implement the Chat Interface
```typescript
const thread = await openai.beta.threads.create();

const message = await openai.beta.threads.messages.create(
  thread.id,
  {
    role: "user",
    content: "Hello, how can you help me?"
  }
);

const run = await openai.beta.threads.runs.create(
  thread.id,
  { assistant_id: assistant.id }
);
```

## Best Practices
1. Always handle API errors gracefully
2. Implement rate limiting
3. Store conversation history
4. Use environment variables for API keys

## Conclusion
With these steps, you'll have a functional chat assistant. Customize it further based on your needs!
"#,
};
