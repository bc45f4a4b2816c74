//! Communication module fixtures: scheduled messages, notices, delivery logs,
//! templates and gateway health.

use crate::fixtures::dispatch::DispatchRule;
use crate::matching::PathMatcher;
use serde_json::{json, Value};

pub fn rules() -> Vec<DispatchRule> {
    vec![
        DispatchRule::new(
            "communication-scheduled",
            PathMatcher::contains("/communication/scheduled"),
            |_, _| scheduled_messages(),
        ),
        DispatchRule::new(
            "communication-notices",
            PathMatcher::contains("/communication/notices"),
            |_, _| notices(),
        ),
        DispatchRule::new(
            "communication-logs",
            PathMatcher::contains("/communication/logs"),
            |_, _| delivery_logs(),
        ),
        DispatchRule::new(
            "communication-templates",
            PathMatcher::segment("/communication/templates"),
            |matched, _| template(matched.segment.as_deref().unwrap_or_default()),
        ),
        DispatchRule::new(
            "communication-gateway-status",
            PathMatcher::contains("/communication/gateway-status"),
            |_, _| gateway_status(),
        ),
    ]
}

pub fn scheduled_messages() -> Value {
    json!([
        {
            "id": "sched-1",
            "channelType": "sms",
            "subject": "Fee Reminder",
            "content": "Dear parent, the term fee is due on 15 February.",
            "recipientCount": 245,
            "scheduledAt": "2024-02-10T09:00:00.000Z",
            "createdAt": "2024-02-01T11:20:00.000Z",
            "jobId": "job-7f3a91",
            "status": "pending"
        },
        {
            "id": "sched-2",
            "channelType": "email",
            "subject": "Parent Teacher Meeting",
            "content": "The parent teacher meeting will be held on Saturday at 10 AM.",
            "recipientCount": 120,
            "scheduledAt": "2024-02-12T06:30:00.000Z",
            "createdAt": "2024-02-02T08:05:00.000Z",
            "jobId": "job-2c48d0",
            "status": "pending"
        },
        {
            "id": "sched-3",
            "channelType": "whatsapp",
            "subject": "Holiday Notice",
            "content": "School remains closed on Monday for the public holiday.",
            "recipientCount": 530,
            "scheduledAt": "2024-01-28T04:00:00.000Z",
            "createdAt": "2024-01-25T13:45:00.000Z",
            "jobId": "job-91be55",
            "status": "sent"
        }
    ])
}

pub fn notices() -> Value {
    json!([
        {
            "id": "notice-1",
            "title": "Annual Sports Day",
            "content": "Sports day will be held on 24 February. Students report by 8 AM.",
            "audience": "all",
            "validFrom": "2024-02-01",
            "validUntil": "2024-02-24",
            "isPinned": true
        },
        {
            "id": "notice-2",
            "title": "Library Books Return",
            "content": "All borrowed library books must be returned before the term exams.",
            "audience": "students",
            "validFrom": "2024-02-05",
            "validUntil": "2024-03-01",
            "isPinned": false
        },
        {
            "id": "notice-3",
            "title": "Staff Meeting",
            "content": "Monthly staff meeting in the conference hall after school.",
            "audience": "staff",
            "validFrom": "2024-02-08",
            "validUntil": "2024-02-09",
            "isPinned": false
        }
    ])
}

pub fn delivery_logs() -> Value {
    json!([
        {
            "id": "log-1",
            "channel": "sms",
            "recipient": "+15550100001",
            "status": "delivered",
            "cost": 0.05,
            "sentAt": "2024-02-01T09:00:04.000Z"
        },
        {
            "id": "log-2",
            "channel": "email",
            "recipient": "parent.sharma@example.com",
            "status": "delivered",
            "cost": 0.0,
            "sentAt": "2024-02-01T09:00:06.000Z"
        },
        {
            "id": "log-3",
            "channel": "sms",
            "recipient": "+15550100002",
            "status": "failed",
            "cost": 0.0,
            "sentAt": "2024-02-01T09:00:07.000Z"
        },
        {
            "id": "log-4",
            "channel": "whatsapp",
            "recipient": "+15550100003",
            "status": "read",
            "cost": 0.02,
            "sentAt": "2024-02-01T09:01:12.000Z"
        }
    ])
}

/// Single-element list with a template named after `kind`.
pub fn template(kind: &str) -> Value {
    json!([
        {
            "id": format!("template-{kind}"),
            "name": format!("{kind} Template"),
            "type": kind,
            "subject": format!("Default {kind} subject"),
            "content": "Dear {{name}}, this is a message from the school.",
            "variables": ["name"]
        }
    ])
}

pub fn gateway_status() -> Value {
    json!([
        {
            "channel": "sms",
            "status": "operational",
            "successRate": 98.4,
            "rateLimit": { "limit": 1000, "used": 312, "remaining": 688, "windowSeconds": 3600 }
        },
        {
            "channel": "email",
            "status": "operational",
            "successRate": 99.7,
            "rateLimit": { "limit": 5000, "used": 1204, "remaining": 3796, "windowSeconds": 3600 }
        },
        {
            "channel": "whatsapp",
            "status": "degraded",
            "successRate": 91.2,
            "rateLimit": { "limit": 250, "used": 249, "remaining": 1, "windowSeconds": 60 }
        }
    ])
}
